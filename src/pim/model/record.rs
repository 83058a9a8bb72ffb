use super::fields::{Address, Birthday, Email, Name, Phone};
use crate::error::{PimError, Result};
use std::fmt;

/// Placeholder rendered for optional fields that are not set.
pub const EMPTY_FIELD: &str = "—";

/// A single contact.
///
/// Phones are kept in insertion order and never contain duplicates. Every
/// mutation validates its input before touching the record, so a failed call
/// leaves the record exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    email: Option<Email>,
    address: Option<Address>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self::with_name(Name::validate(name)?))
    }

    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            email: None,
            address: None,
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, phone: &str) -> Result<()> {
        if self.position(phone).is_some() {
            return Err(PimError::DuplicatePhone(phone.to_string()));
        }
        self.phones.push(Phone::validate(phone)?);
        Ok(())
    }

    /// Replaces `old` with `new` in place, keeping its position in the list.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let idx = self
            .position(old)
            .ok_or_else(|| PimError::PhoneNotFound(old.to_string()))?;
        self.phones[idx] = Phone::validate(new)?;
        Ok(())
    }

    pub fn delete_phone(&mut self, phone: &str) -> Result<()> {
        let idx = self
            .position(phone)
            .ok_or_else(|| PimError::PhoneNotFound(phone.to_string()))?;
        self.phones.remove(idx);
        Ok(())
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    pub fn set_email(&mut self, email: &str) -> Result<()> {
        self.email = Some(Email::validate(email)?);
        Ok(())
    }

    pub fn set_address(&mut self, address: &str) -> Result<()> {
        self.address = Some(Address::validate(address)?);
        Ok(())
    }

    pub fn set_birthday(&mut self, birthday: &str) -> Result<()> {
        self.birthday = Some(Birthday::validate(birthday)?);
        Ok(())
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            EMPTY_FIELD.to_string()
        } else {
            self.phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let email = self.email.as_ref().map_or(EMPTY_FIELD, Email::as_str);
        let address = self.address.as_ref().map_or(EMPTY_FIELD, Address::as_str);
        let birthday = self
            .birthday
            .map_or_else(|| EMPTY_FIELD.to_string(), |b| b.to_string());

        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Phones: {}", phones)?;
        writeln!(f, "Email: {}", email)?;
        writeln!(f, "Address: {}", address)?;
        write!(f, "Birthday: {}", birthday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn john() -> Record {
        let mut r = Record::new("John Doe").unwrap();
        r.add_phone("0501234567").unwrap();
        r
    }

    #[test]
    fn new_rejects_empty_name() {
        assert!(matches!(
            Record::new("  "),
            Err(PimError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn add_phone_rejects_duplicate_and_keeps_list() {
        let mut r = john();
        let err = r.add_phone("0501234567").unwrap_err();
        assert!(matches!(err, PimError::DuplicatePhone(_)));
        assert_eq!(r.phones().len(), 1);
    }

    #[test]
    fn add_phone_validates() {
        let mut r = john();
        assert!(matches!(
            r.add_phone("12345"),
            Err(PimError::Validation(ValidationError::InvalidPhone(_)))
        ));
        assert_eq!(r.phones().len(), 1);
    }

    #[test]
    fn edit_phone_preserves_position() {
        let mut r = john();
        r.add_phone("0670000000").unwrap();
        r.add_phone("0930000000").unwrap();
        r.edit_phone("0670000000", "0671111111").unwrap();

        let phones: Vec<_> = r.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["0501234567", "0671111111", "0930000000"]);
    }

    #[test]
    fn edit_phone_missing_old_is_not_found() {
        let mut r = john();
        let err = r.edit_phone("0000000000", "0671111111").unwrap_err();
        assert!(matches!(err, PimError::PhoneNotFound(_)));
    }

    #[test]
    fn edit_phone_invalid_new_leaves_record_unchanged() {
        let mut r = john();
        let before = r.clone();
        let err = r.edit_phone("0501234567", "bad").unwrap_err();
        assert!(matches!(err, PimError::Validation(_)));
        assert_eq!(r, before);
    }

    #[test]
    fn delete_phone() {
        let mut r = john();
        r.delete_phone("0501234567").unwrap();
        assert!(r.phones().is_empty());
        assert!(r.delete_phone("0501234567").unwrap_err().is_not_found());
    }

    #[test]
    fn find_phone_never_fails() {
        let r = john();
        assert_eq!(r.find_phone("0501234567").unwrap().as_str(), "0501234567");
        assert!(r.find_phone("0000000000").is_none());
    }

    #[test]
    fn setters_replace_and_validate() {
        let mut r = john();
        r.set_email("john@example.com").unwrap();
        r.set_email("doe@example.com").unwrap();
        assert_eq!(r.email().unwrap().as_str(), "doe@example.com");

        assert!(r.set_email("broken").is_err());
        assert_eq!(r.email().unwrap().as_str(), "doe@example.com");

        assert!(r.set_birthday("31.02.1990").is_err());
        assert!(r.birthday().is_none());
        r.set_birthday("12.10.1992").unwrap();
        assert_eq!(r.birthday().unwrap().to_string(), "12.10.1992");
    }

    #[test]
    fn renders_full_record() {
        let mut r = john();
        r.add_phone("0670000000").unwrap();
        r.set_email("john@example.com").unwrap();
        r.set_address("Kyiv, Main Street 12").unwrap();
        r.set_birthday("12.10.1992").unwrap();

        assert_eq!(
            r.to_string(),
            "Name: John Doe\n\
             Phones: 0501234567, 0670000000\n\
             Email: john@example.com\n\
             Address: Kyiv, Main Street 12\n\
             Birthday: 12.10.1992"
        );
    }

    #[test]
    fn renders_placeholders_for_missing_fields() {
        let r = Record::new("Jane").unwrap();
        assert_eq!(
            r.to_string(),
            "Name: Jane\nPhones: —\nEmail: —\nAddress: —\nBirthday: —"
        );
    }
}
