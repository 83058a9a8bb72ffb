use crate::commands::helpers::load_notes;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ValidationError};
use crate::model::{Note, NoteId};
use crate::store::BookStore;

fn owned(notes: Vec<&Note>) -> Vec<Note> {
    notes.into_iter().cloned().collect()
}

pub fn add<S: BookStore>(store: &mut S, text: &str, tags: Vec<String>) -> Result<CmdResult> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyNote.into());
    }

    let mut result = CmdResult::default();
    let mut book = load_notes(store, &mut result)?;
    let note = book.add_note(text, tags)?.clone();
    store.save_notes(&book)?;

    result.add_message(CmdMessage::success(format!("Note added ({})", note.id())));
    Ok(result.with_listed_notes(vec![note]))
}

/// All notes in id order, or ordered by first tag when `by_tags` is set.
pub fn list<S: BookStore>(store: &S, by_tags: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let book = load_notes(store, &mut result)?;
    let notes = if by_tags {
        owned(book.sort_by_tags())
    } else {
        book.notes().cloned().collect()
    };
    Ok(result.with_listed_notes(notes))
}

/// See [`Note::edit`] for how `None` and empty values are treated.
pub fn edit<S: BookStore>(
    store: &mut S,
    id: NoteId,
    text: Option<&str>,
    tags: Option<Vec<String>>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut book = load_notes(store, &mut result)?;
    let note = book.edit_note(id, text, tags)?.clone();
    store.save_notes(&book)?;

    result.add_message(CmdMessage::success(format!("Note updated ({})", id)));
    Ok(result.with_listed_notes(vec![note]))
}

pub fn delete<S: BookStore>(store: &mut S, id: NoteId) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut book = load_notes(store, &mut result)?;
    let removed = book.delete_note(id)?;
    store.save_notes(&book)?;

    result.add_message(CmdMessage::success(format!(
        "Note deleted ({}): {}",
        id, removed.text
    )));
    Ok(result)
}

pub fn search_tag<S: BookStore>(store: &S, tag: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if tag.is_empty() {
        result.add_message(CmdMessage::error("Tag cannot be empty"));
        return Ok(result);
    }

    let book = load_notes(store, &mut result)?;
    let found = owned(book.find_by_tag(tag));
    if found.is_empty() {
        result.add_message(CmdMessage::info(format!("No notes tagged '{}'", tag)));
    }
    Ok(result.with_listed_notes(found))
}

pub fn search_keyword<S: BookStore>(store: &S, keyword: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if keyword.is_empty() {
        result.add_message(CmdMessage::error("Search term cannot be empty"));
        return Ok(result);
    }

    let book = load_notes(store, &mut result)?;
    let found = owned(book.find_by_keywords(keyword));
    if found.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No notes containing '{}'",
            keyword
        )));
    }
    Ok(result.with_listed_notes(found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::PimError;
    use crate::store::memory::InMemoryStore;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn seeded() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        add(&mut store, "Buy milk", tags(&["shopping"])).unwrap();
        add(&mut store, "Plan vacation", tags(&["travel", "summer"])).unwrap();
        add(&mut store, "Learn Rust", vec![]).unwrap();
        store
    }

    fn ids(result: &CmdResult) -> Vec<NoteId> {
        result.listed_notes.iter().map(Note::id).collect()
    }

    #[test]
    fn add_assigns_ids_across_loads() {
        let store = seeded();
        assert_eq!(ids(&list(&store, false).unwrap()), vec![1, 2, 3]);
    }

    #[test]
    fn add_rejects_blank_text() {
        let mut store = InMemoryStore::new();
        let err = add(&mut store, "   ", vec![]).unwrap_err();
        assert!(matches!(
            err,
            PimError::Validation(ValidationError::EmptyNote)
        ));
        assert!(store.notes_json().is_none());
    }

    #[test]
    fn list_by_tags() {
        let store = seeded();
        assert_eq!(ids(&list(&store, true).unwrap()), vec![3, 1, 2]);
    }

    #[test]
    fn edit_and_clear_tags() {
        let mut store = seeded();
        edit(&mut store, 2, Some("Plan trip"), None).unwrap();
        edit(&mut store, 2, None, Some(vec![])).unwrap();

        let notes = list(&store, false).unwrap().listed_notes;
        assert_eq!(notes[1].text, "Plan trip");
        assert!(notes[1].tags.is_empty());
    }

    #[test]
    fn edit_missing_note() {
        let mut store = seeded();
        let err = edit(&mut store, 99, Some("x"), None).unwrap_err();
        assert!(matches!(err, PimError::NoteNotFound(99)));
    }

    #[test]
    fn delete_then_add_does_not_reuse_lower_ids() {
        let mut store = seeded();
        delete(&mut store, 2).unwrap();
        let result = add(&mut store, "Another", vec![]).unwrap();
        assert_eq!(ids(&result), vec![4]);
        assert!(delete(&mut store, 2).unwrap_err().is_not_found());
    }

    #[test]
    fn deleting_the_newest_note_does_not_free_its_id() {
        let mut store = InMemoryStore::new();
        add(&mut store, "one", vec![]).unwrap();
        add(&mut store, "two", vec![]).unwrap();
        delete(&mut store, 2).unwrap();

        let result = add(&mut store, "three", vec![]).unwrap();
        assert_eq!(ids(&result), vec![3]);
        assert_eq!(ids(&list(&store, false).unwrap()), vec![1, 3]);
    }

    #[test]
    fn search_by_tag_and_keyword() {
        let store = seeded();
        assert_eq!(ids(&search_tag(&store, "travel").unwrap()), vec![2]);
        assert_eq!(ids(&search_keyword(&store, "milk").unwrap()), vec![1]);
        assert_eq!(ids(&search_keyword(&store, "RUST").unwrap()), vec![3]);

        let none = search_tag(&store, "Travel").unwrap();
        assert!(none.listed_notes.is_empty());
        assert!(none.has_level(MessageLevel::Info));
    }

    #[test]
    fn empty_search_input_is_reported() {
        let store = seeded();
        assert!(search_tag(&store, "").unwrap().has_level(MessageLevel::Error));
        assert!(search_keyword(&store, "")
            .unwrap()
            .has_level(MessageLevel::Error));
    }
}
