use crate::error::{PimError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CONTACTS_FILE: &str = "contacts.json";
const DEFAULT_NOTES_FILE: &str = "notes.json";

pub const KEYS: &[&str] = &["contacts-file", "notes-file"];

/// Configuration for pim, stored in `<data dir>/config.json`.
///
/// File names may be relative (resolved against the data directory) or
/// absolute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PimConfig {
    #[serde(default = "default_contacts_file")]
    pub contacts_file: String,

    #[serde(default = "default_notes_file")]
    pub notes_file: String,
}

fn default_contacts_file() -> String {
    DEFAULT_CONTACTS_FILE.to_string()
}

fn default_notes_file() -> String {
    DEFAULT_NOTES_FILE.to_string()
}

impl Default for PimConfig {
    fn default() -> Self {
        Self {
            contacts_file: default_contacts_file(),
            notes_file: default_notes_file(),
        }
    }
}

impl PimConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let config_path = data_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PimError::Io)?;
        let config: PimConfig = serde_json::from_str(&content).map_err(PimError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, data_dir: P) -> Result<()> {
        let data_dir = data_dir.as_ref();

        if !data_dir.exists() {
            fs::create_dir_all(data_dir).map_err(PimError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(PimError::Serialization)?;
        fs::write(data_dir.join(CONFIG_FILENAME), content).map_err(PimError::Io)?;
        Ok(())
    }

    pub fn contacts_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.contacts_file)
    }

    pub fn notes_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.notes_file)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "contacts-file" => Some(self.contacts_file.clone()),
            "notes-file" => Some(self.notes_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            return Err(format!("{} cannot be empty", key));
        }
        match key {
            "contacts-file" => self.contacts_file = value.to_string(),
            "notes-file" => self.notes_file = value.to_string(),
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}
