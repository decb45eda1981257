//! The presentation boundary the controller talks to.

use core::fmt;

use clubhouse_members::FieldName;

/// Something the operator should be told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    NotFound { key: String },
    AlreadyExists { key: String },
    Invalid { field: Option<FieldName> },
    Saved { count: usize },
    SaveFailed { reason: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NotFound { key } => write!(f, "Clubber with key {key} does not exist"),
            Notice::AlreadyExists { key } => write!(f, "Clubber with key {key} already exists"),
            Notice::Invalid { field: Some(field) } => write!(f, "Invalid value for {field}"),
            Notice::Invalid { field: None } => f.write_str("Invalid value"),
            Notice::Saved { count } => write!(f, "Saved {count} clubber(s)"),
            Notice::SaveFailed { reason } => write!(f, "Could not save clubbers: {reason}"),
        }
    }
}

/// Modal prompts and notifications.
///
/// Prompts block until the operator answers; `None` means the prompt was
/// dismissed. An empty answer is still an answer.
pub trait Surface {
    fn prompt(&mut self, message: &str) -> Option<String>;

    fn notify(&mut self, notice: &Notice);
}
