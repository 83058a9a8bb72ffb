//! Core data types: validated fields, contact records, and the two books.

pub mod address_book;
pub mod fields;
pub mod notes;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday};
pub use fields::{Address, Birthday, Email, Name, Phone};
pub use notes::{Note, NoteId, NotesBook};
pub use record::Record;
