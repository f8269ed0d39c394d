use thiserror::Error;

/// Domain-level validation failures.
///
/// Deliberately small: most oddities in model metadata are not errors here.
/// An unrecognized field type degrades to the opaque classification, and
/// slug ambiguity resolves to the primary key - neither is ever raised.
/// What remains is input that cannot be worked with at all.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("invalid app name: {0:?}")]
    InvalidAppName(String),

    #[error("invalid model name {name:?}: {reason}")]
    InvalidModelName { name: String, reason: String },

    #[error("model '{model}' declares field '{field}' more than once")]
    DuplicateFieldName { model: String, field: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidAppName(_) => vec![
                "App names must be non-empty".into(),
                "Check the app entries in your schema manifest".into(),
            ],
            Self::InvalidModelName { name, reason } => vec![
                format!("Model name '{}' is invalid: {}", name, reason),
                "Model names are PascalCase identifiers, e.g. PumpernickelBread".into(),
            ],
            Self::DuplicateFieldName { model, field } => vec![
                format!("Remove the duplicate '{}' entry from model '{}'", field, model),
                "Field order is significant; every name may appear once".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
