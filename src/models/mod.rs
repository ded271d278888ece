//! Data models for the contact book.
//!
//! This module contains the contact record and the directory that owns all
//! records for the lifetime of the process.

pub mod directory;
pub mod record;

pub use directory::{ContactDirectory, UpcomingBirthday};
pub use record::ContactRecord;
