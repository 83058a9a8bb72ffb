//! # API Facade
//!
//! [`PimApi`] is the single entry point for every pim operation. It only
//! dispatches: the logic lives in `commands/`, and persistence behind the
//! [`BookStore`] the facade is built with.
//!
//! `PimApi<S: BookStore>` is generic over the store so the same facade runs
//! on [`JsonFileStore`](crate::store::fs::JsonFileStore) in the binary and on
//! [`InMemoryStore`](crate::store::memory::InMemoryStore) in tests.
//!
//! Nothing here prints. Callers get a `Result<CmdResult>` back and decide how
//! to show it.

use crate::commands;
use crate::error::Result;
use crate::model::NoteId;
use crate::store::BookStore;
use chrono::{Local, NaiveDate};

pub struct PimApi<S: BookStore> {
    store: S,
    paths: commands::PimPaths,
}

impl<S: BookStore> PimApi<S> {
    pub fn new(store: S, paths: commands::PimPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_contact(&mut self, contact: NewContact) -> Result<CmdResult> {
        commands::contacts::add(&mut self.store, contact)
    }

    pub fn list_contacts(&self) -> Result<CmdResult> {
        commands::contacts::list(&self.store)
    }

    pub fn show_contact(&self, name: &str) -> Result<CmdResult> {
        commands::contacts::show(&self.store, name)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        commands::contacts::delete(&mut self.store, name)
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::contacts::add_phone(&mut self.store, name, phone)
    }

    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        commands::contacts::edit_phone(&mut self.store, name, old, new)
    }

    pub fn delete_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::contacts::delete_phone(&mut self.store, name, phone)
    }

    pub fn find_phone(&self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::contacts::find_phone(&self.store, name, phone)
    }

    pub fn set_email(&mut self, name: &str, email: &str) -> Result<CmdResult> {
        commands::contacts::set_email(&mut self.store, name, email)
    }

    pub fn set_address(&mut self, name: &str, address: &str) -> Result<CmdResult> {
        commands::contacts::set_address(&mut self.store, name, address)
    }

    pub fn set_birthday(&mut self, name: &str, birthday: &str) -> Result<CmdResult> {
        commands::contacts::set_birthday(&mut self.store, name, birthday)
    }

    /// Birthdays exactly `days` from the local calendar date.
    pub fn birthdays_in_days(&self, days: u64) -> Result<CmdResult> {
        self.birthdays_from(Local::now().date_naive(), days)
    }

    pub fn birthdays_from(&self, today: NaiveDate, days: u64) -> Result<CmdResult> {
        commands::contacts::birthdays(&self.store, days, today)
    }

    pub fn add_note(&mut self, text: &str, tags: Vec<String>) -> Result<CmdResult> {
        commands::notes::add(&mut self.store, text, tags)
    }

    pub fn list_notes(&self, by_tags: bool) -> Result<CmdResult> {
        commands::notes::list(&self.store, by_tags)
    }

    pub fn edit_note(
        &mut self,
        id: NoteId,
        text: Option<&str>,
        tags: Option<Vec<String>>,
    ) -> Result<CmdResult> {
        commands::notes::edit(&mut self.store, id, text, tags)
    }

    pub fn delete_note(&mut self, id: NoteId) -> Result<CmdResult> {
        commands::notes::delete(&mut self.store, id)
    }

    pub fn search_notes_by_tag(&self, tag: &str) -> Result<CmdResult> {
        commands::notes::search_tag(&self.store, tag)
    }

    pub fn search_notes(&self, keyword: &str) -> Result<CmdResult> {
        commands::notes::search_keyword(&self.store, keyword)
    }

    pub fn show_config(&self) -> Result<CmdResult> {
        commands::config::show(&self.paths)
    }

    pub fn config_value(&self, key: &str) -> Result<CmdResult> {
        commands::config::get(&self.paths, key)
    }

    pub fn set_config(&self, key: &str, value: &str) -> Result<CmdResult> {
        commands::config::set(&self.paths, key, value)
    }

    pub fn paths(&self) -> &commands::PimPaths {
        &self.paths
    }
}

pub use crate::commands::contacts::NewContact;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, PimPaths};
