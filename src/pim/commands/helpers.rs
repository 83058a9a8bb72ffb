use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{AddressBook, NotesBook};
use crate::store::{BookStore, Loaded};

fn unpack<T>(loaded: Loaded<T>, result: &mut CmdResult) -> T {
    for warning in loaded.warnings {
        result.add_message(CmdMessage::warning(warning));
    }
    loaded.book
}

pub fn load_contacts<S: BookStore>(store: &S, result: &mut CmdResult) -> Result<AddressBook> {
    Ok(unpack(store.load_contacts()?, result))
}

pub fn load_notes<S: BookStore>(store: &S, result: &mut CmdResult) -> Result<NotesBook> {
    Ok(unpack(store.load_notes()?, result))
}
