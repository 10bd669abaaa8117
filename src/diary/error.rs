//! Entry creation errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntryError {
    #[error("Invalid duration {duration}: {reason}")]
    InvalidDuration { duration: i64, reason: &'static str },

    #[error("Invalid catalog item '{name}': {reason}")]
    InvalidCatalogItem { name: String, reason: String },
}

impl EntryError {
    pub(crate) fn duration(duration: i64, reason: &'static str) -> Self {
        EntryError::InvalidDuration { duration, reason }
    }
}
