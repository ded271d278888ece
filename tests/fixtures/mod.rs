//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable contacts and a fixed-date session.

use chrono::NaiveDate;
use contact_book::{Config, ContactRecord, FixedClock, Repl};

/// Build a date, panicking on an impossible one.
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Create a sample record with one phone and an optional birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phone: &str, birthday: Option<&str>) -> ContactRecord {
    let mut record = ContactRecord::new(name).unwrap();
    record.add_phone(phone).unwrap();
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).unwrap();
    }
    record
}

/// A session whose clock is frozen on `today`.
#[allow(dead_code)]
pub fn session_on(today: NaiveDate) -> Repl<FixedClock> {
    Repl::new(&Config::default(), FixedClock(today))
}

/// Feed `script` through a fresh session and return everything it printed.
#[allow(dead_code)]
pub fn run_script(today: NaiveDate, script: &str) -> String {
    let mut repl = session_on(today);
    let mut output = Vec::new();
    repl.run(script.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}
