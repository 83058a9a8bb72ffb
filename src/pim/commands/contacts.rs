use crate::commands::helpers::load_contacts;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PimError, Result};
use crate::model::Record;
use crate::store::BookStore;
use chrono::NaiveDate;

/// Input for [`add`]. Only the name and phone are required.
#[derive(Debug, Clone, Default)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub birthday: Option<String>,
}

impl NewContact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            ..Default::default()
        }
    }
}

fn apply_new_fields(record: &mut Record, contact: &NewContact) -> Result<()> {
    record.add_phone(&contact.phone)?;
    if let Some(email) = &contact.email {
        record.set_email(email)?;
    }
    if let Some(address) = &contact.address {
        record.set_address(address)?;
    }
    if let Some(birthday) = &contact.birthday {
        record.set_birthday(birthday)?;
    }
    Ok(())
}

/// Adds a contact. If one with the same name exists, the phone is added to
/// it and any given optional fields replace the stored ones.
pub fn add<S: BookStore>(store: &mut S, contact: NewContact) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut book = load_contacts(store, &mut result)?;

    let (mut record, existed) = match book.find(&contact.name) {
        Some(existing) => (existing.clone(), true),
        None => (Record::new(&contact.name)?, false),
    };
    apply_new_fields(&mut record, &contact)?;

    book.add_record(record.clone());
    store.save_contacts(&book)?;

    result.add_message(CmdMessage::success(if existed {
        format!("Contact updated: {}", record.name())
    } else {
        format!("Contact added: {}", record.name())
    }));
    Ok(result.with_listed_records(vec![record]))
}

pub fn list<S: BookStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let book = load_contacts(store, &mut result)?;
    Ok(result.with_listed_records(book.records().to_vec()))
}

pub fn show<S: BookStore>(store: &S, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let book = load_contacts(store, &mut result)?;
    let record = book
        .find(name)
        .cloned()
        .ok_or_else(|| PimError::RecordNotFound(name.to_string()))?;
    Ok(result.with_listed_records(vec![record]))
}

pub fn delete<S: BookStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut book = load_contacts(store, &mut result)?;
    let removed = book.delete(name)?;
    store.save_contacts(&book)?;
    result.add_message(CmdMessage::success(format!(
        "Contact deleted: {}",
        removed.name()
    )));
    Ok(result)
}

/// Applies `op` to the named record and saves the book if it succeeds.
fn update_record<S, F>(store: &mut S, name: &str, op: F) -> Result<CmdResult>
where
    S: BookStore,
    F: FnOnce(&mut Record) -> Result<String>,
{
    let mut result = CmdResult::default();
    let mut book = load_contacts(store, &mut result)?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| PimError::RecordNotFound(name.to_string()))?;

    let message = op(record)?;
    let updated = record.clone();
    store.save_contacts(&book)?;

    result.add_message(CmdMessage::success(message));
    Ok(result.with_listed_records(vec![updated]))
}

pub fn add_phone<S: BookStore>(store: &mut S, name: &str, phone: &str) -> Result<CmdResult> {
    update_record(store, name, |r| {
        r.add_phone(phone)?;
        Ok(format!("Phone {} added to {}", phone, name))
    })
}

pub fn edit_phone<S: BookStore>(
    store: &mut S,
    name: &str,
    old: &str,
    new: &str,
) -> Result<CmdResult> {
    update_record(store, name, |r| {
        r.edit_phone(old, new)?;
        Ok(format!("Phone {} changed to {} for {}", old, new, name))
    })
}

pub fn delete_phone<S: BookStore>(store: &mut S, name: &str, phone: &str) -> Result<CmdResult> {
    update_record(store, name, |r| {
        r.delete_phone(phone)?;
        Ok(format!("Phone {} removed from {}", phone, name))
    })
}

pub fn find_phone<S: BookStore>(store: &S, name: &str, phone: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let book = load_contacts(store, &mut result)?;
    let record = book
        .find(name)
        .ok_or_else(|| PimError::RecordNotFound(name.to_string()))?;

    result.add_message(match record.find_phone(phone) {
        Some(found) => CmdMessage::info(format!("{}: {}", name, found)),
        None => CmdMessage::info(format!("{} has no phone {}", name, phone)),
    });
    Ok(result)
}

pub fn set_email<S: BookStore>(store: &mut S, name: &str, email: &str) -> Result<CmdResult> {
    update_record(store, name, |r| {
        r.set_email(email)?;
        Ok(format!("Email for {} set to {}", name, email))
    })
}

pub fn set_address<S: BookStore>(store: &mut S, name: &str, address: &str) -> Result<CmdResult> {
    update_record(store, name, |r| {
        r.set_address(address)?;
        Ok(format!("Address for {} set to {}", name, address))
    })
}

pub fn set_birthday<S: BookStore>(store: &mut S, name: &str, birthday: &str) -> Result<CmdResult> {
    update_record(store, name, |r| {
        r.set_birthday(birthday)?;
        Ok(format!("Birthday for {} set to {}", name, birthday))
    })
}

/// Contacts whose next birthday is exactly `days` after `today`.
pub fn birthdays<S: BookStore>(store: &S, days: u64, today: NaiveDate) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let book = load_contacts(store, &mut result)?;
    let upcoming = book.upcoming_birthdays(today, days);
    if upcoming.is_empty() {
        result.add_message(CmdMessage::info(format!("No birthdays in {} days", days)));
    }
    Ok(result.with_birthdays(upcoming))
}
