//! Integration tests for the upcoming-birthdays window.

mod fixtures;

use contact_book::{ContactDirectory, UpcomingBirthday};
use fixtures::*;

fn directory_with(birthdays: &[(&str, &str)]) -> ContactDirectory {
    let mut directory = ContactDirectory::new();
    for (name, birthday) in birthdays {
        directory.add_record(sample_record(name, "1234567890", Some(*birthday)));
    }
    directory
}

#[test]
fn test_birthday_two_days_ahead_is_included() {
    let directory = directory_with(&[("Ann", "12.06.1990")]);

    assert_eq!(
        directory.upcoming_birthdays(date(2024, 6, 10)),
        vec![UpcomingBirthday {
            name: "Ann".to_string(),
            date: date(2024, 6, 12),
        }]
    );
}

#[test]
fn test_birthday_seven_days_ahead_is_excluded() {
    let directory = directory_with(&[("Bob", "17.06.1990")]);
    assert!(directory.upcoming_birthdays(date(2024, 6, 10)).is_empty());
}

#[test]
fn test_every_day_of_the_window() {
    let today = date(2024, 6, 10);
    for offset in 0..10u32 {
        let birthday = format!("{:02}.06.1990", 10 + offset);
        let directory = directory_with(&[("Ann", birthday.as_str())]);

        let included = !directory.upcoming_birthdays(today).is_empty();
        assert_eq!(included, offset < 7, "offset {offset}");
    }
}

#[test]
fn test_passed_birthday_moves_to_next_year() {
    let directory = directory_with(&[("Ann", "01.01.1990")]);

    let upcoming = directory.upcoming_birthdays(date(2024, 12, 28));
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].date, date(2025, 1, 1));
}

#[test]
fn test_yesterday_is_not_upcoming() {
    let directory = directory_with(&[("Ann", "09.06.1990")]);
    assert!(directory.upcoming_birthdays(date(2024, 6, 10)).is_empty());
}

#[test]
fn test_leap_day_birthday_in_common_year() {
    let directory = directory_with(&[("Leap", "29.02.1992")]);

    let upcoming = directory.upcoming_birthdays(date(2025, 2, 27));
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].date, date(2025, 2, 28));

    assert!(directory.upcoming_birthdays(date(2025, 3, 1)).is_empty());
}

#[test]
fn test_results_keep_directory_order() {
    let directory = directory_with(&[
        ("Carol", "15.06.1970"),
        ("Alice", "11.06.1980"),
        ("Bob", "30.06.1990"),
        ("Dave", "10.06.2000"),
    ]);

    let names: Vec<String> = directory
        .upcoming_birthdays(date(2024, 6, 10))
        .into_iter()
        .map(|u| u.name)
        .collect();
    assert_eq!(names, vec!["Carol", "Alice", "Dave"]);
}

#[test]
fn test_records_without_birthday_are_skipped() {
    let mut directory = directory_with(&[("Ann", "12.06.1990")]);
    directory.add_record(sample_record("NoDate", "0987654321", None));

    assert_eq!(directory.upcoming_birthdays(date(2024, 6, 10)).len(), 1);
}
