//! One function per user-facing operation.
//!
//! Every command follows the same shape: load the book it touches through
//! the [`BookStore`](crate::store::BookStore), apply the model operation,
//! save only if that succeeded, and describe the outcome in a [`CmdResult`].
//! Load warnings are carried through as [`MessageLevel::Warning`] messages.

use crate::config::PimConfig;
use crate::model::{Note, Record, UpcomingBirthday};
use std::path::PathBuf;

pub mod config;
pub mod contacts;
pub mod helpers;
pub mod notes;

/// Where the data directory lives; the config file sits inside it.
#[derive(Debug, Clone)]
pub struct PimPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_records: Vec<Record>,
    pub listed_notes: Vec<Note>,
    pub birthdays: Vec<UpcomingBirthday>,
    pub config: Option<PimConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<Note>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_birthdays(mut self, birthdays: Vec<UpcomingBirthday>) -> Self {
        self.birthdays = birthdays;
        self
    }

    pub fn with_config(mut self, config: PimConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
