//! Roster error types.
//!
//! Loading and saving are the only fallible operations in the core. The two
//! failure kinds are kept apart so the CLI can degrade on a bad load and fail
//! fast on a bad save.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while reading or writing the roster file.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The file could not be read, was not valid JSON, or had the wrong shape.
    #[error("failed to load roster from {}: {message}", path.display())]
    Load { path: PathBuf, message: String },

    /// The roster could not be serialized or written.
    #[error("failed to save roster to {}: {message}", path.display())]
    Save { path: PathBuf, message: String },
}

impl RosterError {
    pub(crate) fn load(path: &Path, message: impl Into<String>) -> Self {
        RosterError::Load {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    pub(crate) fn save(path: &Path, message: impl Into<String>) -> Self {
        RosterError::Save {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Returns `true` for errors raised while loading.
    pub fn is_load(&self) -> bool {
        matches!(self, RosterError::Load { .. })
    }

    /// Returns `true` for errors raised while saving.
    pub fn is_save(&self) -> bool {
        matches!(self, RosterError::Save { .. })
    }

    /// The underlying cause, without the path prefix.
    pub fn message(&self) -> &str {
        match self {
            RosterError::Load { message, .. } | RosterError::Save { message, .. } => message,
        }
    }
}

/// Errors raised when adding a student to the roster.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// Another student already uses this email.
    #[error("email already registered: {0}")]
    DuplicateEmail(String),
}
