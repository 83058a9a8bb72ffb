//! Validated value types for contact data.
//!
//! Each type is constructed through `validate`, which either returns a value
//! that satisfies the type's format rule or a [`ValidationError`]. There is
//! no shared base type: the fields have nothing in common beyond rendering,
//! which each covers with its own `Display` impl.
//!
//! Rules:
//! - [`Name`]: non-empty after trimming whitespace
//! - [`Phone`]: exactly [`PHONE_DIGITS`] ASCII decimal digits
//! - [`Email`]: `local@domain.tld`, see [`EMAIL_PATTERN`]
//! - [`Birthday`]: a real Gregorian date written `DD.MM.YYYY`
//! - [`Address`]: free text, always accepted

use crate::error::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Number of digits a phone number must have.
pub const PHONE_DIGITS: usize = 10;

pub const EMAIL_PATTERN: &str = r"^[\w.-]+@[\w.-]+\.\w+$";

/// Date format used for birthdays, both for input and rendering.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("valid email regex"));

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn validate(raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Accepts exactly ten ASCII digits. Separators, a leading `+` and
    /// non-ASCII digits are all rejected.
    pub fn validate(raw: &str) -> Result<Self, ValidationError> {
        if raw.len() == PHONE_DIGITS && raw.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidPhone(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn validate(raw: &str) -> Result<Self, ValidationError> {
        if EMAIL_RE.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidEmail(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn validate(raw: &str) -> Result<Self, ValidationError> {
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn validate(raw: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

/// Renders a date the way birthdays are written (`DD.MM.YYYY`).
pub fn format_date(date: NaiveDate) -> String {
    date.format(BIRTHDAY_FORMAT).to_string()
}

macro_rules! string_field_impls {
    ($($ty:ident),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl FromStr for $ty {
                type Err = ValidationError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::validate(s)
                }
            }
        )*
    };
}

string_field_impls!(Name, Phone, Email, Address);

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_date(self.0))
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)
    }
}
