//! Property tests for phone and birthday validation.
//!
//! Reproducible: set the `PROPTEST_SEED` environment variable for deterministic runs.

use chrono::NaiveDate;
use contact_book::domain::birthday::BIRTHDAY_FORMAT;
use contact_book::{BirthdayDate, PhoneNumber};
use proptest::prelude::*;

fn is_ten_ascii_digits(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Any calendar date the birthday format can write: years 0001 through 9999.
fn real_date() -> impl Strategy<Value = NaiveDate> {
    (1i32..=9999, 1u32..=12, 1u32..=31)
        .prop_filter_map("not a calendar date", |(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
}

proptest! {
    #[test]
    fn ten_digit_strings_are_valid_phones(value in "[0-9]{10}") {
        let phone = PhoneNumber::new(value.clone()).unwrap();
        prop_assert_eq!(phone.as_str(), value.as_str());
    }

    #[test]
    fn other_lengths_of_digits_are_rejected(value in "[0-9]{0,9}|[0-9]{11,20}") {
        prop_assert!(PhoneNumber::new(value).is_err());
    }

    #[test]
    fn any_non_digit_is_rejected(
        digits in "[0-9]{10}",
        index in 0usize..10,
        bad in any::<char>().prop_filter("must not be an ASCII digit", |c| !c.is_ascii_digit()),
    ) {
        let mut chars: Vec<char> = digits.chars().collect();
        chars[index] = bad;
        let value: String = chars.into_iter().collect();
        prop_assert!(PhoneNumber::new(value).is_err());
    }

    #[test]
    fn arbitrary_strings_validate_only_when_ten_digits(value in any::<String>()) {
        prop_assert_eq!(PhoneNumber::new(value.clone()).is_ok(), is_ten_ascii_digits(&value));
    }

    #[test]
    fn real_dates_round_trip(date in real_date()) {
        let text = date.format(BIRTHDAY_FORMAT).to_string();
        let birthday = BirthdayDate::parse(&text).unwrap();

        prop_assert_eq!(birthday.date(), date);
        prop_assert_eq!(birthday.to_string(), text);
    }

    #[test]
    fn impossible_dates_are_rejected(y in 1i32..=9999, m in 0u32..=99, d in 0u32..=99) {
        prop_assume!(NaiveDate::from_ymd_opt(y, m, d).is_none());
        let text = format!("{:02}.{:02}.{:04}", d, m, y);
        prop_assert!(BirthdayDate::parse(&text).is_err());
    }
}
