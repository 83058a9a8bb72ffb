//! On-disk shapes of the two documents and the conversion to and from the
//! in-memory books.
//!
//! Contacts:
//! ```json
//! [
//!     {
//!         "name": "John Doe",
//!         "phones": ["0501234567"],
//!         "email": "john@example.com",
//!         "address": "Kyiv",
//!         "birthday": "12.10.1992"
//!     }
//! ]
//! ```
//! `email`, `address` and `birthday` are omitted when unset. A single
//! `"phone"` string, as written by older files, is read as the first phone.
//!
//! Entries that fail validation are skipped on load but written back as
//! they were on the next save, unless a valid contact has taken their name.
//!
//! Notes:
//! ```json
//! [
//!     { "id": 1, "text": "Buy milk", "tags": ["shopping"] }
//! ]
//! ```
//! The id counter lives in a small state document next to it,
//! `{ "next_id": 4 }`, so the notes file itself stays a plain array.
//!
//! Documents are decoded from raw bytes; invalid UTF-8 anywhere, including
//! inside a string, makes the whole document malformed.

use super::Loaded;
use crate::error::{PimError, Result};
use crate::model::{AddressBook, Note, NoteId, NotesBook, Record};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

const INDENT: &[u8] = b"    ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDoc {
    pub name: String,
    #[serde(default, skip_serializing)]
    pub phone: Option<String>,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

impl From<&Record> for ContactDoc {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            phone: None,
            phones: record.phones().iter().map(ToString::to_string).collect(),
            email: record.email().map(ToString::to_string),
            address: record.address().map(ToString::to_string),
            birthday: record.birthday().map(ToString::to_string),
        }
    }
}

impl TryFrom<ContactDoc> for Record {
    type Error = PimError;

    fn try_from(doc: ContactDoc) -> Result<Self> {
        let mut record = Record::new(&doc.name)?;
        for phone in doc.phone.iter().chain(doc.phones.iter()) {
            if record.find_phone(phone).is_none() {
                record.add_phone(phone)?;
            }
        }
        if let Some(email) = &doc.email {
            record.set_email(email)?;
        }
        if let Some(address) = &doc.address {
            record.set_address(address)?;
        }
        if let Some(birthday) = &doc.birthday {
            record.set_birthday(birthday)?;
        }
        Ok(record)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDoc {
    pub id: NoteId,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<&Note> for NoteDoc {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id(),
            text: note.text.clone(),
            tags: note.tags.clone(),
        }
    }
}

impl From<NoteDoc> for Note {
    fn from(doc: NoteDoc) -> Self {
        Note::with_id(doc.id, doc.text, doc.tags)
    }
}

/// A contacts document entry on the way out: either a current record or an
/// entry from the previous document that could not be loaded.
#[derive(Serialize)]
#[serde(untagged)]
enum ContactEntry<'a> {
    Current(ContactDoc),
    Kept(&'a Value),
}

/// Encodes `book`. Entries of `previous` that would be skipped on load are
/// appended unchanged, except those whose name `book` now holds.
pub fn encode_contacts(book: &AddressBook, previous: Option<&[u8]>) -> Result<String> {
    let kept = previous.map(skipped_entries).unwrap_or_default();
    let entries: Vec<ContactEntry> = book
        .records()
        .iter()
        .map(|record| ContactEntry::Current(ContactDoc::from(record)))
        .chain(
            kept.iter()
                .filter(|entry| entry_name(entry).map_or(true, |name| book.find(name).is_none()))
                .map(ContactEntry::Kept),
        )
        .collect();
    to_pretty_json(&entries)
}

pub fn encode_notes(book: &NotesBook) -> Result<String> {
    let docs: Vec<NoteDoc> = book.notes().map(NoteDoc::from).collect();
    to_pretty_json(&docs)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesState {
    pub next_id: NoteId,
}

pub fn encode_notes_state(book: &NotesBook) -> Result<String> {
    to_pretty_json(&NotesState {
        next_id: book.next_id(),
    })
}

/// The saved id counter, or `None` if the state document is unreadable.
pub fn decode_notes_state(source: &[u8], origin: &str) -> Option<NoteId> {
    match serde_json::from_slice::<NotesState>(source) {
        Ok(state) => Some(state.next_id),
        Err(e) => {
            tracing::warn!("Ignoring unreadable note counter in {}: {}", origin, e);
            None
        }
    }
}

fn entry_name(entry: &Value) -> Option<&str> {
    entry.get("name").and_then(Value::as_str)
}

fn parse_contact(entry: &Value) -> Result<Record> {
    let doc: ContactDoc = serde_json::from_value(entry.clone())?;
    Record::try_from(doc)
}

/// Raw entries of a contacts document that [`decode_contacts`] would skip.
fn skipped_entries(source: &[u8]) -> Vec<Value> {
    serde_json::from_slice::<Vec<Value>>(source)
        .map(|entries| {
            entries
                .into_iter()
                .filter(|entry| parse_contact(entry).is_err())
                .collect()
        })
        .unwrap_or_default()
}

/// Decodes a contacts document. `origin` names the document in warnings.
pub fn decode_contacts(source: &[u8], origin: &str) -> Loaded<AddressBook> {
    let entries: Vec<Value> = match serde_json::from_slice(source) {
        Ok(entries) => entries,
        Err(e) => return malformed(origin, &e),
    };

    let mut loaded = Loaded::new(AddressBook::new());
    for entry in &entries {
        match parse_contact(entry) {
            Ok(record) => loaded.book.add_record(record),
            Err(e) => {
                let warning = format!(
                    "Skipped contact '{}' in {}: {}",
                    entry_name(entry).unwrap_or("?"),
                    origin,
                    e
                );
                tracing::warn!("{}", warning);
                loaded.warnings.push(warning);
            }
        }
    }
    loaded
}

pub fn decode_notes(source: &[u8], origin: &str) -> Loaded<NotesBook> {
    match serde_json::from_slice::<Vec<NoteDoc>>(source) {
        Ok(docs) => Loaded::new(NotesBook::from_notes(docs.into_iter().map(Note::from))),
        Err(e) => malformed(origin, &e),
    }
}

fn malformed<T: Default>(origin: &str, err: &serde_json::Error) -> Loaded<T> {
    let warning = format!(
        "Could not read {} ({}); starting with an empty list",
        origin, err
    );
    tracing::warn!("{}", warning);
    Loaded::with_warning(T::default(), warning)
}

/// Pretty JSON with a four-space indent. Non-ASCII text is written as-is.
fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    String::from_utf8(buf)
        .map_err(|e| PimError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> Record {
        let mut r = Record::new("Олена Коваль").unwrap();
        r.add_phone("0501234567").unwrap();
        r.add_phone("0670000000").unwrap();
        r.set_email("olena@example.com").unwrap();
        r.set_address("Київ, вул. Хрещатик 1").unwrap();
        r.set_birthday("29.02.2000").unwrap();
        r
    }

    #[test]
    fn contacts_survive_encoding() {
        let mut book = AddressBook::new();
        book.add_record(full_record());
        book.add_record(Record::new("Bare").unwrap());

        let json = encode_contacts(&book, None).unwrap();
        let loaded = decode_contacts(json.as_bytes(), "contacts");
        assert!(loaded.warnings.is_empty());
        assert_eq!(loaded.book, book);
    }

    #[test]
    fn encoding_keeps_non_ascii_and_indents() {
        let mut book = AddressBook::new();
        book.add_record(full_record());
        let json = encode_contacts(&book, None).unwrap();

        assert!(json.contains("\"name\": \"Олена Коваль\""));
        assert!(json.contains("\n        \"phones\": ["));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn absent_optional_fields_are_omitted() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Bare").unwrap());
        let json = encode_contacts(&book, None).unwrap();
        assert!(!json.contains("email"));
        assert!(!json.contains("birthday"));
        assert!(json.contains("\"phones\": []"));
    }

    #[test]
    fn reads_legacy_single_phone() {
        let json = r#"[{"name": "John", "phone": "0501234567"}]"#;
        let loaded = decode_contacts(json.as_bytes(), "contacts");
        let record = loaded.book.find("John").unwrap();
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "0501234567");
    }

    #[test]
    fn legacy_phone_is_not_duplicated() {
        let json = r#"[{"name": "John", "phone": "0501234567", "phones": ["0501234567", "0670000000"]}]"#;
        let loaded = decode_contacts(json.as_bytes(), "contacts");
        assert_eq!(loaded.book.find("John").unwrap().phones().len(), 2);
    }

    #[test]
    fn invalid_entries_are_skipped_with_warning() {
        let json = r#"[
            {"name": "Good", "phones": ["0501234567"]},
            {"name": "Bad", "phones": ["123"]},
            {"name": "", "phones": []}
        ]"#;
        let loaded = decode_contacts(json.as_bytes(), "contacts");
        assert_eq!(loaded.book.len(), 1);
        assert_eq!(loaded.warnings.len(), 2);
        assert!(loaded.warnings[0].contains("Bad"));
    }

    #[test]
    fn malformed_contacts_load_empty() {
        let loaded = decode_contacts(b"{ not json", "contacts.json");
        assert!(loaded.book.is_empty());
        assert_eq!(loaded.warnings.len(), 1);
        assert!(loaded.warnings[0].contains("contacts.json"));
    }

    #[test]
    fn wrong_shape_counts_as_malformed() {
        let loaded = decode_notes(br#"{"id": 1}"#, "notes");
        assert!(loaded.book.is_empty());
        assert_eq!(loaded.warnings.len(), 1);
    }

    #[test]
    fn notes_survive_encoding() {
        let mut book = NotesBook::new();
        book.add_note("Купити молоко", vec!["покупки".into()])
            .unwrap();
        book.add_note("Plan vacation", vec!["travel".into(), "summer".into()])
            .unwrap();
        book.add_note("No tags", vec![]).unwrap();

        let json = encode_notes(&book).unwrap();
        assert!(json.contains("Купити молоко"));
        let loaded = decode_notes(json.as_bytes(), "notes");
        assert!(loaded.warnings.is_empty());
        assert_eq!(loaded.book, book);
    }

    #[test]
    fn notes_without_tags_key_default_to_empty() {
        let loaded = decode_notes(br#"[{"id": 3, "text": "x"}]"#, "notes");
        assert!(loaded.book.get(3).unwrap().tags.is_empty());
        assert_eq!(loaded.book.next_id(), 4);
    }

    #[test]
    fn skipped_contacts_are_written_back() {
        let previous: &[u8] = br#"[
            {"name": "Good", "phones": ["0501234567"]},
            {"name": "Short", "phone": "1234567"},
            {"phones": ["0501234567"]}
        ]"#;
        let mut loaded = decode_contacts(previous, "contacts");
        assert_eq!(loaded.warnings.len(), 2);
        loaded.book.add_record(Record::new("Ann").unwrap());

        let json = encode_contacts(&loaded.book, Some(previous)).unwrap();
        let entries: Vec<Value> = serde_json::from_str(&json).unwrap();
        let names: Vec<_> = entries.iter().map(entry_name).collect();
        assert_eq!(names, vec![Some("Good"), Some("Ann"), Some("Short"), None]);
        assert_eq!(entries[2]["phone"], "1234567");

        let reloaded = decode_contacts(json.as_bytes(), "contacts");
        assert_eq!(reloaded.book, loaded.book);
        assert_eq!(reloaded.warnings.len(), 2);
    }

    #[test]
    fn valid_contact_replaces_skipped_entry_of_same_name() {
        let previous: &[u8] = br#"[{"name": "Short", "phone": "1234567"}]"#;
        let mut book = decode_contacts(previous, "contacts").book;
        let mut fixed = Record::new("Short").unwrap();
        fixed.add_phone("0501234567").unwrap();
        book.add_record(fixed);

        let json = encode_contacts(&book, Some(previous)).unwrap();
        assert!(!json.contains("\"phone\":"));
        let reloaded = decode_contacts(json.as_bytes(), "contacts");
        assert!(reloaded.warnings.is_empty());
        assert_eq!(reloaded.book, book);
    }

    #[test]
    fn invalid_utf8_inside_a_string_is_malformed() {
        let loaded = decode_contacts(
            b"[{\"name\": \"Jo\xE9\", \"phones\": [\"0501234567\"]}]",
            "contacts",
        );
        assert!(loaded.book.is_empty());
        assert_eq!(loaded.warnings.len(), 1);
    }

    #[test]
    fn notes_state_keeps_counter() {
        let mut book = NotesBook::new();
        book.add_note("one", vec![]).unwrap();
        book.add_note("two", vec![]).unwrap();
        book.delete_note(2).unwrap();

        let state = encode_notes_state(&book).unwrap();
        assert_eq!(decode_notes_state(state.as_bytes(), "state"), Some(3));
        assert_eq!(decode_notes_state(b"{ nope", "state"), None);
    }
}
