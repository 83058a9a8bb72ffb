use super::format::{
    decode_contacts, decode_notes, decode_notes_state, encode_contacts, encode_notes,
    encode_notes_state,
};
use super::{BookStore, Loaded};
use crate::error::Result;
use crate::model::{AddressBook, NotesBook};

/// Holds the encoded documents in memory. `None` behaves like a missing file.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    contacts: Option<String>,
    notes: Option<String>,
    notes_state: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the contacts document with raw text, valid or not.
    pub fn with_contacts_json(mut self, json: &str) -> Self {
        self.contacts = Some(json.to_string());
        self
    }

    pub fn with_notes_json(mut self, json: &str) -> Self {
        self.notes = Some(json.to_string());
        self
    }

    pub fn contacts_json(&self) -> Option<&str> {
        self.contacts.as_deref()
    }

    pub fn notes_json(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn notes_state_json(&self) -> Option<&str> {
        self.notes_state.as_deref()
    }
}

impl BookStore for InMemoryStore {
    fn load_contacts(&self) -> Result<Loaded<AddressBook>> {
        Ok(self
            .contacts
            .as_deref()
            .map(|json| decode_contacts(json.as_bytes(), "contacts"))
            .unwrap_or_default())
    }

    fn load_notes(&self) -> Result<Loaded<NotesBook>> {
        let mut loaded: Loaded<NotesBook> = self
            .notes
            .as_deref()
            .map(|json| decode_notes(json.as_bytes(), "notes"))
            .unwrap_or_default();
        if let Some(next_id) = self
            .notes_state
            .as_deref()
            .and_then(|json| decode_notes_state(json.as_bytes(), "notes state"))
        {
            loaded.book.resume_counter(next_id);
        }
        Ok(loaded)
    }

    fn save_contacts(&mut self, book: &AddressBook) -> Result<()> {
        let previous = self.contacts.as_deref().map(str::as_bytes);
        self.contacts = Some(encode_contacts(book, previous)?);
        Ok(())
    }

    fn save_notes(&mut self, book: &NotesBook) -> Result<()> {
        self.notes = Some(encode_notes(book)?);
        self.notes_state = Some(encode_notes_state(book)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_loads_empty_books() {
        let store = InMemoryStore::new();
        assert!(store.load_contacts().unwrap().book.is_empty());
        assert!(store.load_notes().unwrap().book.is_empty());
    }

    #[test]
    fn seeded_garbage_degrades_to_empty() {
        let store = InMemoryStore::new().with_contacts_json("[{]");
        let loaded = store.load_contacts().unwrap();
        assert!(loaded.book.is_empty());
        assert_eq!(loaded.warnings.len(), 1);
    }

    #[test]
    fn save_then_load() {
        let mut store = InMemoryStore::new();
        let mut book = NotesBook::new();
        book.add_note("Buy milk", vec!["shopping".into()]).unwrap();
        store.save_notes(&book).unwrap();

        assert!(store.notes_json().unwrap().contains("Buy milk"));
        assert!(store.notes_state_json().unwrap().contains("\"next_id\": 2"));
        assert_eq!(store.load_notes().unwrap().book, book);
    }
}
