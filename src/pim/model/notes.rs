//! Tagged free-text notes keyed by integer id.
//!
//! Ids come from a counter that starts at 1 and only moves forward, so a
//! deleted note's id is never handed out again. The counter outlives a
//! reload only if the store persists it; see [`NotesBook::resume_counter`].
//! Because ids are strictly increasing, ordering notes by id is the same as
//! ordering them by insertion, which is the iteration order every query here
//! returns.

use crate::error::{PimError, Result};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

pub type NoteId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    id: NoteId,
    pub text: String,
    pub tags: Vec<String>,
}

impl Note {
    /// Builds a note with an id that has already been assigned, e.g. one read
    /// back from disk. New notes should go through [`NotesBook::add_note`].
    pub fn with_id(id: NoteId, text: String, tags: Vec<String>) -> Self {
        Self { id, text, tags }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Partial update. `new_text` replaces the text only when it is non-empty;
    /// `new_tags` replaces the tags whenever it is `Some`, including
    /// `Some(vec![])` which clears them.
    pub fn edit(&mut self, new_text: Option<&str>, new_tags: Option<Vec<String>>) {
        if let Some(text) = new_text.filter(|t| !t.is_empty()) {
            self.text = text.to_string();
        }
        if let Some(tags) = new_tags {
            self.tags = tags;
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Sort key used by [`NotesBook::sort_by_tags`].
    pub fn first_tag(&self) -> &str {
        self.tags.first().map(String::as_str).unwrap_or("")
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags = if self.tags.is_empty() {
            "—".to_string()
        } else {
            self.tags.join(", ")
        };
        write!(f, "[{}] {} (tags: {})", self.id, self.text, tags)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesBook {
    notes: BTreeMap<NoteId, Note>,
    next_id: NoteId,
}

impl Default for NotesBook {
    fn default() -> Self {
        Self {
            notes: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl NotesBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a book from notes that already carry ids. A repeated id keeps
    /// the later note. The counter resumes after the highest id seen.
    pub fn from_notes<I: IntoIterator<Item = Note>>(notes: I) -> Self {
        let mut book = Self::default();
        for note in notes {
            book.next_id = book.next_id.max(note.id.saturating_add(1));
            book.notes.insert(note.id, note);
        }
        book
    }

    /// Moves the counter up to `next_id` if it is behind. Stores call this
    /// with the counter they saved, so ids freed by deleting the newest
    /// notes stay retired across reloads.
    pub fn resume_counter(&mut self, next_id: NoteId) {
        self.next_id = self.next_id.max(next_id);
    }

    pub fn add_note(&mut self, text: &str, tags: Vec<String>) -> Result<&Note> {
        let id = self.next_id;
        let next = id.checked_add(1).ok_or(PimError::NoteIdsExhausted)?;
        match self.notes.entry(id) {
            Entry::Vacant(slot) => {
                self.next_id = next;
                Ok(slot.insert(Note::with_id(id, text.to_string(), tags)))
            }
            Entry::Occupied(_) => Err(PimError::NoteIdsExhausted),
        }
    }

    pub fn delete_note(&mut self, id: NoteId) -> Result<Note> {
        self.notes.remove(&id).ok_or(PimError::NoteNotFound(id))
    }

    pub fn edit_note(
        &mut self,
        id: NoteId,
        new_text: Option<&str>,
        new_tags: Option<Vec<String>>,
    ) -> Result<&Note> {
        let note = self.notes.get_mut(&id).ok_or(PimError::NoteNotFound(id))?;
        note.edit(new_text, new_tags);
        Ok(note)
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(&id)
    }

    pub fn get_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.get_mut(&id)
    }

    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The id the next [`add_note`](Self::add_note) will assign.
    pub fn next_id(&self) -> NoteId {
        self.next_id
    }

    /// Exact, case-sensitive tag match.
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Note> {
        self.notes().filter(|n| n.has_tag(tag)).collect()
    }

    /// Case-insensitive substring match against the note text.
    pub fn find_by_keywords(&self, keyword: &str) -> Vec<&Note> {
        let keyword = keyword.to_lowercase();
        self.notes()
            .filter(|n| n.text.to_lowercase().contains(&keyword))
            .collect()
    }

    /// Notes ordered by their first tag; untagged notes sort as `""`.
    /// The sort is stable, so ties keep id order.
    pub fn sort_by_tags(&self) -> Vec<&Note> {
        let mut notes: Vec<&Note> = self.notes().collect();
        notes.sort_by(|a, b| a.first_tag().cmp(b.first_tag()));
        notes
    }
}

/// Splits comma-separated tag input, trimming each piece and dropping empties.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
