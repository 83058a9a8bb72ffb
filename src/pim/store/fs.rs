use super::format::{
    decode_contacts, decode_notes, decode_notes_state, encode_contacts, encode_notes,
    encode_notes_state,
};
use super::{BookStore, Loaded};
use crate::error::{PimError, Result};
use crate::model::{AddressBook, NotesBook};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Keeps contacts and notes in two JSON files. The note id counter goes in
/// a third, derived from the notes path (`notes.json` -> `notes.state.json`).
pub struct JsonFileStore {
    contacts_path: PathBuf,
    notes_path: PathBuf,
    notes_state_path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(contacts_path: P, notes_path: Q) -> Self {
        let notes_path = notes_path.as_ref().to_path_buf();
        Self {
            contacts_path: contacts_path.as_ref().to_path_buf(),
            notes_state_path: notes_path.with_extension("state.json"),
            notes_path,
        }
    }

    pub fn contacts_path(&self) -> &Path {
        &self.contacts_path
    }

    pub fn notes_path(&self) -> &Path {
        &self.notes_path
    }

    pub fn notes_state_path(&self) -> &Path {
        &self.notes_state_path
    }
}

/// Reads a document's raw bytes, mapping "missing" to `None`. UTF-8 is
/// checked by the decoder.
fn read_document(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(PimError::Io(e)),
    }
}

/// Replaces `path` with `content` through a temp file in the same directory.
fn write_document(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(PimError::Io)?;
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| PimError::Config(format!("Not a file path: {}", path.display())))?;
    let tmp_path = dir.join(format!(".{}.{}.tmp", file_name, std::process::id()));

    fs::write(&tmp_path, content).map_err(PimError::Io)?;
    fs::rename(&tmp_path, path).map_err(PimError::Io)?;
    Ok(())
}

impl BookStore for JsonFileStore {
    fn load_contacts(&self) -> Result<Loaded<AddressBook>> {
        let Some(source) = read_document(&self.contacts_path)? else {
            tracing::debug!(path = %self.contacts_path.display(), "no contacts file yet");
            return Ok(Loaded::default());
        };
        let loaded = decode_contacts(&source, &self.contacts_path.display().to_string());
        tracing::debug!(
            path = %self.contacts_path.display(),
            records = loaded.book.len(),
            "loaded contacts"
        );
        Ok(loaded)
    }

    fn load_notes(&self) -> Result<Loaded<NotesBook>> {
        let mut loaded = match read_document(&self.notes_path)? {
            Some(source) => decode_notes(&source, &self.notes_path.display().to_string()),
            None => {
                tracing::debug!(path = %self.notes_path.display(), "no notes file yet");
                Loaded::default()
            }
        };
        if let Some(state) = read_document(&self.notes_state_path)? {
            let origin = self.notes_state_path.display().to_string();
            if let Some(next_id) = decode_notes_state(&state, &origin) {
                loaded.book.resume_counter(next_id);
            }
        }
        tracing::debug!(
            path = %self.notes_path.display(),
            notes = loaded.book.len(),
            next_id = loaded.book.next_id(),
            "loaded notes"
        );
        Ok(loaded)
    }

    fn save_contacts(&mut self, book: &AddressBook) -> Result<()> {
        let previous = read_document(&self.contacts_path)?;
        write_document(&self.contacts_path, &encode_contacts(book, previous.as_deref())?)?;
        tracing::debug!(path = %self.contacts_path.display(), records = book.len(), "saved contacts");
        Ok(())
    }

    fn save_notes(&mut self, book: &NotesBook) -> Result<()> {
        write_document(&self.notes_path, &encode_notes(book)?)?;
        write_document(&self.notes_state_path, &encode_notes_state(book)?)?;
        tracing::debug!(
            path = %self.notes_path.display(),
            notes = book.len(),
            next_id = book.next_id(),
            "saved notes"
        );
        Ok(())
    }
}
