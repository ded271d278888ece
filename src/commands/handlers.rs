//! One function per command. Each takes the parsed arguments and the
//! directory and returns the reply text or a [`CommandError`].

use crate::error::{CommandError, CommandResult, ContactError};
use crate::models::{ContactDirectory, ContactRecord};
use chrono::NaiveDate;
use tracing::info;

/// Birthday dates in replies use the same format as input.
const DATE_FORMAT: &str = crate::domain::birthday::BIRTHDAY_FORMAT;

fn not_found(name: &str) -> CommandError {
    ContactError::ContactNotFound(name.to_string()).into()
}

/// `add <name> <phone>`: create the contact or give an existing one another phone.
pub(super) fn add_contact(args: &[&str], book: &mut ContactDirectory) -> CommandResult<String> {
    let [name, phone, ..] = args else {
        return Err(CommandError::MissingArguments("name and phone"));
    };

    match book.find_mut(name) {
        Some(record) => record.add_phone(phone)?,
        None => {
            // Only store the new record once its first phone is accepted.
            let mut record = ContactRecord::new(*name)?;
            record.add_phone(phone)?;
            book.add_record(record);
            info!(name, "Contact created");
        }
    }

    Ok("Contact added.".to_string())
}

/// `change <name> <old_phone> <new_phone>`
pub(super) fn change_contact(args: &[&str], book: &mut ContactDirectory) -> CommandResult<String> {
    let [name, old_phone, new_phone, ..] = args else {
        return Err(CommandError::MissingArguments("name, old phone and new phone"));
    };

    let record = book.find_mut(name).ok_or_else(|| not_found(name))?;
    record.edit_phone(old_phone, new_phone)?;

    Ok("Contact updated.".to_string())
}

/// `phone <name>`: the full contact line.
pub(super) fn show_phone(args: &[&str], book: &ContactDirectory) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::MissingArguments("name"));
    };

    let record = book.find(name).ok_or_else(|| not_found(name))?;
    Ok(record.to_string())
}

/// `all`
pub(super) fn all_contacts(book: &ContactDirectory) -> String {
    if book.is_empty() {
        return "No contacts saved yet.".to_string();
    }

    book.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `delete <name>`
pub(super) fn delete_contact(args: &[&str], book: &mut ContactDirectory) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::MissingArguments("name"));
    };

    book.delete(name)?;
    info!(name, "Contact deleted");
    Ok(format!("Contact {} deleted.", name))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub(super) fn add_birthday(args: &[&str], book: &mut ContactDirectory) -> CommandResult<String> {
    let [name, birthday, ..] = args else {
        return Err(CommandError::MissingArguments("name and birthday"));
    };

    let record = book.find_mut(name).ok_or_else(|| not_found(name))?;
    record.add_birthday(birthday)?;

    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub(super) fn show_birthday(args: &[&str], book: &ContactDirectory) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::MissingArguments("name"));
    };

    let record = book.find(name).ok_or_else(|| not_found(name))?;
    Ok(match record.birthday() {
        Some(birthday) => format!("{}'s birthday is on {}", name, birthday),
        None => format!("No birthday set for {}.", name),
    })
}

/// `birthdays`: everyone whose birthday falls in the window starting `today`.
pub(super) fn birthdays(book: &ContactDirectory, today: NaiveDate, window_days: u32) -> String {
    let upcoming = book.upcoming_birthdays_within(today, window_days);
    if upcoming.is_empty() {
        return format!("No upcoming birthdays in the next {} days.", window_days);
    }

    let mut lines = vec![format!("Upcoming birthdays in the next {} days:", window_days)];
    lines.extend(
        upcoming
            .iter()
            .map(|u| format!("{}: {}", u.name, u.date.format(DATE_FORMAT))),
    );
    lines.join("\n")
}
