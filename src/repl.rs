//! The interactive read-eval-print loop.
//!
//! The loop is generic over its input and output so that it can be driven
//! from stdin/stdout in the binary and from in-memory buffers in tests.

use crate::clock::Clock;
use crate::commands::{self, Context, Reply, COMMAND_LIST};
use crate::config::Config;
use crate::models::ContactDirectory;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Interactive session owning the contact directory.
pub struct Repl<C: Clock> {
    book: ContactDirectory,
    clock: C,
    prompt: String,
    birthday_window_days: u32,
}

impl<C: Clock> Repl<C> {
    /// Create a session with an empty directory.
    pub fn new(config: &Config, clock: C) -> Self {
        Self {
            book: ContactDirectory::new(),
            clock,
            prompt: config.prompt.clone(),
            birthday_window_days: config.birthday_window_days,
        }
    }

    /// The directory as it currently stands.
    pub fn book(&self) -> &ContactDirectory {
        &self.book
    }

    /// Handle a single line and return the reply.
    ///
    /// Blank lines ask for a command instead of reaching the parser.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        if line.trim().is_empty() {
            return Reply::Continue("Please enter a command.".to_string());
        }

        let mut ctx = Context {
            book: &mut self.book,
            today: self.clock.today(),
            birthday_window_days: self.birthday_window_days,
        };
        commands::execute(line, &mut ctx)
    }

    /// Read commands from `input` until `exit`/`close` or end of input.
    ///
    /// # Errors
    ///
    /// Only I/O failures on `input` or `output` are returned; command errors
    /// are printed and the loop continues.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        info!("Starting assistant session");
        writeln!(output, "Welcome to the assistant bot!\n{}", COMMAND_LIST)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input");
                writeln!(output)?;
                break;
            }

            // Undecodable bytes become U+FFFD and fail validation like any other typo.
            let line = String::from_utf8_lossy(&buf);
            let reply = self.handle_line(&line);
            writeln!(output, "{}", reply.message())?;
            if reply.is_exit() {
                break;
            }
        }

        info!(contacts = self.book.len(), "Assistant session finished");
        Ok(())
    }
}
