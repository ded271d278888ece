//! Contact Book - an interactive command-line assistant for contacts.
//!
//! Contacts live in memory for the duration of a session. Each contact has a
//! name, any number of ten-digit phone numbers and an optional birthday, and
//! the assistant can list the birthdays coming up in the next week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone numbers, birthdays)
//! - **models**: Contact records and the directory that owns them
//! - **error**: Error types for records, commands and configuration
//! - **config**: Configuration from environment variables
//! - **clock**: Source of the current date
//! - **commands**: Command parsing, handlers and error translation
//! - **repl**: The read-eval-print loop

pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::{Command, Reply};
pub use config::Config;
pub use domain::{BirthdayDate, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, ContactError};
pub use models::{ContactDirectory, ContactRecord, UpcomingBirthday};
pub use repl::Repl;
