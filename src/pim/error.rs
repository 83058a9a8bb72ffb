use thiserror::Error;

/// Raised when raw input does not satisfy a field's format rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Phone must contain exactly 10 digits, got '{0}'")]
    InvalidPhone(String),

    #[error("Incorrect email format: '{0}'")]
    InvalidEmail(String),

    #[error("Birthday must be a valid date in format DD.MM.YYYY, got '{0}'")]
    InvalidBirthday(String),

    #[error("Note text cannot be empty")]
    EmptyNote,
}

#[derive(Error, Debug)]
pub enum PimError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Phone {0} already exists")]
    DuplicatePhone(String),

    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Note not found: {0}")]
    NoteNotFound(u64),

    #[error("No note ids left")]
    NoteIdsExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl PimError {
    /// True for any lookup miss (phone, record or note).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PimError::PhoneNotFound(_) | PimError::RecordNotFound(_) | PimError::NoteNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PimError>;
