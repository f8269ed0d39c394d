//! Application layer errors.
//!
//! These errors represent failures in orchestration, not decision logic.
//! Decision-logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while orchestrating a bake run.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// An override file is registered for an artifact kind but cannot be
    /// read. Fatal for that kind's resolution only; the run continues with
    /// the remaining kinds.
    #[error("override for '{kind}' is unreadable: {reason}")]
    OverrideUnreadable { kind: String, reason: String },

    /// Filesystem operation failed. Fatal for the specific artifact; the
    /// orchestrator records it and continues.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Shared in-memory state lock poisoned (test filesystem).
    #[error("filesystem state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::OverrideUnreadable { kind, .. } => vec![
                format!("The override file for '{}' exists but could not be read", kind),
                "Check read permissions on the override directory".into(),
                "Remove the file to fall back to the built-in template".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::LockPoisoned => vec!["This is likely a bug; try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::OverrideUnreadable { .. } => ErrorCategory::Configuration,
            Self::Filesystem { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
