use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pim")]
#[command(version, about = "Contacts and tagged notes in plain JSON files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json and the data files (default: $PIM_DATA_DIR or the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all contacts
    #[command(alias = "show-contacts")]
    Contacts,

    /// Add a contact, or add a phone to an existing one
    #[command(alias = "add")]
    AddContact {
        name: String,

        /// Ten-digit phone number
        phone: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        address: Option<String>,

        /// Birthday as DD.MM.YYYY
        #[arg(long)]
        birthday: Option<String>,
    },

    /// Show one contact
    Show { name: String },

    /// Delete a contact
    #[command(alias = "rm-contact")]
    DeleteContact { name: String },

    /// Add a phone to a contact
    AddPhone { name: String, phone: String },

    /// Replace one of a contact's phones
    EditPhone {
        name: String,
        old: String,
        new: String,
    },

    /// Remove a phone from a contact
    DeletePhone { name: String, phone: String },

    /// Check whether a contact has a phone
    FindPhone { name: String, phone: String },

    /// Set a contact's email
    SetEmail { name: String, email: String },

    /// Set a contact's address
    SetAddress { name: String, address: String },

    /// Set a contact's birthday (DD.MM.YYYY)
    SetBirthday { name: String, birthday: String },

    /// Contacts whose birthday is exactly DAYS days from today
    Birthdays {
        #[arg(default_value_t = 7)]
        days: u64,
    },

    /// List notes
    #[command(alias = "show-notes")]
    Notes {
        /// Order by first tag instead of id
        #[arg(long)]
        by_tags: bool,
    },

    /// Add a note
    AddNote {
        text: String,

        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Edit a note's text and/or tags
    EditNote {
        id: u64,

        #[arg(long)]
        text: Option<String>,

        /// Comma-separated tags, replacing the current ones
        #[arg(short, long, conflicts_with = "clear_tags")]
        tags: Option<String>,

        /// Remove all tags
        #[arg(long)]
        clear_tags: bool,
    },

    /// Delete a note
    #[command(alias = "rm-note")]
    DeleteNote { id: u64 },

    /// Notes whose text contains KEYWORD (case-insensitive)
    #[command(alias = "search")]
    SearchNotes { keyword: String },

    /// Notes carrying TAG (case-sensitive)
    SearchTag { tag: String },

    /// Get or set configuration
    Config {
        /// Configuration key (contacts-file, notes-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
