//! Contact directory: every record, keyed by name, in insertion order.

use super::record::ContactRecord;
use crate::config::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use crate::error::{ContactError, ContactResult};
use chrono::NaiveDate;
use tracing::debug;

/// A birthday falling inside the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// The date the birthday is next observed
    pub date: NaiveDate,
}

/// Name-keyed collection of contact records.
///
/// Iteration follows insertion order. Replacing a record under an existing
/// name keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    records: Vec<ContactRecord>,
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, overwriting any record stored under the same name.
    pub fn add_record(&mut self, record: ContactRecord) {
        match self.position(record.name()) {
            Some(index) => {
                debug!(name = record.name(), "Replacing contact record");
                self.records[index] = record;
            }
            None => {
                debug!(name = record.name(), "Adding contact record");
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Remove the record stored under `name`.
    pub fn delete(&mut self, name: &str) -> ContactResult<ContactRecord> {
        let index = self
            .position(name)
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))?;
        debug!(name, "Deleting contact record");
        Ok(self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    /// Birthdays falling within seven days of `today`, today included.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, DEFAULT_BIRTHDAY_WINDOW_DAYS)
    }

    /// Birthdays whose next occurrence is fewer than `days` days after `today`.
    ///
    /// A birthday exactly `days` days away is excluded. Results follow the
    /// directory's insertion order.
    pub fn upcoming_birthdays_within(&self, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday> {
        let upcoming: Vec<UpcomingBirthday> = self
            .records
            .iter()
            .filter_map(|record| {
                let date = record.birthday()?.next_occurrence(today)?;
                let delta = (date - today).num_days();
                (delta < i64::from(days)).then(|| UpcomingBirthday {
                    name: record.name().to_string(),
                    date,
                })
            })
            .collect();

        debug!(%today, days, found = upcoming.len(), "Computed upcoming birthdays");
        upcoming
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }
}

impl<'a> IntoIterator for &'a ContactDirectory {
    type Item = &'a ContactRecord;
    type IntoIter = std::slice::Iter<'a, ContactRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
