//! # Storage Layer
//!
//! The [`BookStore`] trait is the persistence boundary for the two books.
//! Stores hold no state beyond where the documents live; every save writes
//! the whole book, and every load rebuilds it from scratch.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production store, two JSON files at paths given
//!   at construction
//! - [`memory::InMemoryStore`]: keeps the encoded documents in memory, used
//!   by command tests
//!
//! Both go through the codec in [`format`], so a document behaves the same
//! way whichever store holds it.
//!
//! ## Degraded loads
//!
//! A missing document loads as an empty book. A document that is not valid
//! JSON (or not the expected shape) also loads as an empty book, with a
//! warning in [`Loaded::warnings`]. Individual entries that fail field
//! validation are skipped with a warning while the rest still load, and
//! the next save writes them back untouched. Only real I/O failures surface
//! as errors. Saves never degrade: any failure is returned to the caller.
//!
//! Stores also persist the note id counter beside the notes, so ids freed
//! by deletion stay retired across loads.

use crate::error::Result;
use crate::model::{AddressBook, NotesBook};

pub mod format;
pub mod fs;
pub mod memory;

/// A loaded book together with anything that had to be dropped on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Loaded<T> {
    pub book: T,
    pub warnings: Vec<String>,
}

impl<T> Loaded<T> {
    pub fn new(book: T) -> Self {
        Self {
            book,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(book: T, warning: String) -> Self {
        Self {
            book,
            warnings: vec![warning],
        }
    }
}

pub trait BookStore {
    fn load_contacts(&self) -> Result<Loaded<AddressBook>>;

    fn load_notes(&self) -> Result<Loaded<NotesBook>>;

    /// Overwrite the stored contacts with `book`. Entries the last load
    /// skipped stay in the document.
    fn save_contacts(&mut self, book: &AddressBook) -> Result<()>;

    /// Overwrite the stored notes with `book`, including its id counter.
    fn save_notes(&mut self, book: &NotesBook) -> Result<()>;
}
