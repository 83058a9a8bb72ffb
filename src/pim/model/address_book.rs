//! Name-keyed collection of contacts.
//!
//! Records are kept in insertion order. Replacing a record under an existing
//! name keeps the original slot, so iteration order only changes on insert or
//! delete. Lookups are linear scans; a personal address book stays small
//! enough that a separate index would not pay for itself.

use super::fields::{format_date, Birthday};
use super::record::Record;
use crate::error::{PimError, Result};
use chrono::{Datelike, Days, Local, NaiveDate};

/// A contact whose next birthday falls on the requested day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The date of the next occurrence, `DD.MM.YYYY`.
    pub birthday: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record`, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(idx) => self.records[idx] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    pub fn delete(&mut self, name: &str) -> Result<Record> {
        let idx = self
            .position(name)
            .ok_or_else(|| PimError::RecordNotFound(name.to_string()))?;
        Ok(self.records.remove(idx))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose next birthday is exactly `days` days from today.
    pub fn birthdays_in_days(&self, days: u64) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(Local::now().date_naive(), days)
    }

    /// Contacts whose next birthday on or after `today` is exactly
    /// `today + days`, in book order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, days: u64) -> Vec<UpcomingBirthday> {
        let Some(target) = today.checked_add_days(Days::new(days)) else {
            return Vec::new();
        };

        self.records
            .iter()
            .filter_map(|record| {
                let next = next_occurrence(record.birthday()?, today);
                (next == target).then(|| UpcomingBirthday {
                    name: record.name().to_string(),
                    birthday: format_date(next),
                })
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

/// The first anniversary of `birthday` on or after `today`.
///
/// A Feb 29 birthday falls on Mar 1 in non-leap years.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> NaiveDate {
    let this_year = anniversary(birthday.date(), today.year());
    if this_year < today {
        anniversary(birthday.date(), today.year() + 1)
    } else {
        this_year
    }
}

fn anniversary(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(name: &str, birthday: Option<&str>) -> Record {
        let mut r = Record::new(name).unwrap();
        if let Some(b) = birthday {
            r.set_birthday(b).unwrap();
        }
        r
    }

    #[test]
    fn add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(record("John", None));
        assert_eq!(book.find("John").unwrap().name().as_str(), "John");
        assert!(book.find("Jane").is_none());
    }

    #[test]
    fn add_record_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("A", None));
        book.add_record(record("B", None));
        book.add_record(record("A", Some("01.01.1990")));

        let names: Vec<_> = book.records().iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(book.find("A").unwrap().birthday().is_some());
    }

    #[test]
    fn delete_missing_is_not_found() {
        let mut book = AddressBook::new();
        let err = book.delete("Ghost").unwrap_err();
        assert!(matches!(err, PimError::RecordNotFound(_)));
    }

    #[test]
    fn delete_then_find_is_absent() {
        let mut book = AddressBook::new();
        book.add_record(record("John", None));
        book.delete("John").unwrap();
        assert!(book.find("John").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn leap_day_birthday_moves_to_march_first() {
        let mut book = AddressBook::new();
        book.add_record(record("Leap", Some("29.02.2000")));

        let result = book.upcoming_birthdays(ymd(2025, 2, 28), 1);
        assert_eq!(
            result,
            vec![UpcomingBirthday {
                name: "Leap".into(),
                birthday: "01.03.2025".into(),
            }]
        );
    }

    #[test]
    fn leap_day_birthday_in_leap_year() {
        let mut book = AddressBook::new();
        book.add_record(record("Leap", Some("29.02.2000")));

        let result = book.upcoming_birthdays(ymd(2028, 2, 28), 1);
        assert_eq!(result[0].birthday, "29.02.2028");
    }

    #[test]
    fn past_birthday_rolls_to_next_year() {
        let mut book = AddressBook::new();
        book.add_record(record("Jan", Some("05.01.1990")));

        let today = ymd(2025, 12, 31);
        assert!(book.upcoming_birthdays(today, 0).is_empty());
        let result = book.upcoming_birthdays(today, 5);
        assert_eq!(result[0].birthday, "05.01.2026");
    }

    #[test]
    fn birthday_today_matches_zero_days() {
        let mut book = AddressBook::new();
        book.add_record(record("Today", Some("12.10.1992")));
        let result = book.upcoming_birthdays(ymd(2025, 10, 12), 0);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].birthday, "12.10.2025");
    }

    #[test]
    fn only_exact_day_matches_in_book_order() {
        let mut book = AddressBook::new();
        book.add_record(record("B", Some("15.06.1980")));
        book.add_record(record("NoBirthday", None));
        book.add_record(record("A", Some("15.06.1991")));
        book.add_record(record("C", Some("16.06.1991")));

        let result = book.upcoming_birthdays(ymd(2025, 6, 10), 5);
        let names: Vec<_> = result.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn next_occurrence_handles_year_end() {
        let b = Birthday::validate("01.01.2000").unwrap();
        assert_eq!(next_occurrence(&b, ymd(2024, 1, 1)), ymd(2024, 1, 1));
        assert_eq!(next_occurrence(&b, ymd(2024, 1, 2)), ymd(2025, 1, 1));
    }
}
