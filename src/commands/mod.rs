//! Command parsing and dispatch.
//!
//! A line of input is split on whitespace into a command word and its
//! arguments. [`execute`] routes the command to its handler and turns every
//! [`CommandError`] into the text shown to the user, so a bad command never
//! stops the session.

mod handlers;

use crate::error::{CommandError, CommandResult};
use crate::models::ContactDirectory;
use chrono::NaiveDate;
use std::fmt;
use tracing::debug;

/// Commands understood by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Delete,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl Command {
    /// Look up a command by its (case-insensitive) keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let command = match keyword.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "delete" => Self::Delete,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "exit" | "close" => Self::Exit,
            _ => return None,
        };
        Some(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::Delete => "delete",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::Exit => "exit",
        };
        write!(f, "{}", keyword)
    }
}

/// Text listing every command, shared by the greeting and `hello`.
pub const COMMAND_LIST: &str = "You can use command hello, add, change, phone, all, delete, \
     add-birthday, birthdays, show-birthday or exit/close";

/// What the session should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and wait for the next command
    Continue(String),

    /// Print the message and end the session
    Exit(String),
}

impl Reply {
    pub fn message(&self) -> &str {
        match self {
            Self::Continue(message) | Self::Exit(message) => message,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit(_))
    }
}

/// Everything a handler needs besides its arguments.
pub struct Context<'a> {
    pub book: &'a mut ContactDirectory,
    pub today: NaiveDate,
    pub birthday_window_days: u32,
}

/// Split a line into its command word and arguments.
///
/// # Errors
///
/// Returns `CommandError::InvalidFormat` if the line holds no tokens.
pub fn parse_input(line: &str) -> CommandResult<(&str, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next().ok_or(CommandError::InvalidFormat)?;
    Ok((keyword, tokens.collect()))
}

/// Run one line of input against the directory.
pub fn execute(line: &str, ctx: &mut Context<'_>) -> Reply {
    let (keyword, args) = match parse_input(line) {
        Ok(parsed) => parsed,
        Err(e) => return Reply::Continue(e.to_string()),
    };

    let Some(command) = Command::from_keyword(keyword) else {
        debug!(keyword, "Unknown command");
        return Reply::Continue("Command not found! Please try again".to_string());
    };

    debug!(%command, args = args.len(), "Dispatching command");
    let result = match command {
        Command::Hello => Ok(format!("How can I help you?\n{}", COMMAND_LIST)),
        Command::Add => handlers::add_contact(&args, ctx.book),
        Command::Change => handlers::change_contact(&args, ctx.book),
        Command::Phone => handlers::show_phone(&args, ctx.book),
        Command::All => Ok(handlers::all_contacts(ctx.book)),
        Command::Delete => handlers::delete_contact(&args, ctx.book),
        Command::AddBirthday => handlers::add_birthday(&args, ctx.book),
        Command::ShowBirthday => handlers::show_birthday(&args, ctx.book),
        Command::Birthdays => Ok(handlers::birthdays(
            ctx.book,
            ctx.today,
            ctx.birthday_window_days,
        )),
        Command::Exit => return Reply::Exit("Goodbye!".to_string()),
    };

    match result {
        Ok(message) => Reply::Continue(message),
        Err(e) => {
            debug!(%command, error = %e, "Command failed");
            Reply::Continue(e.to_string())
        }
    }
}
