//! Input validation applied at the orchestrator boundary.
//!
//! Malformed input is the one condition the engine refuses to work around:
//! an unnameable app or model would produce unaddressable files.

use super::error::DomainError;
use super::model::Model;

pub fn validate_app_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(DomainError::InvalidAppName(name.to_string()));
    }
    Ok(())
}

pub fn validate_model(model: &Model) -> Result<(), DomainError> {
    if model.name.is_empty() {
        return Err(DomainError::InvalidModelName {
            name: model.name.clone(),
            reason: "name cannot be empty".into(),
        });
    }
    if !model.name.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err(DomainError::InvalidModelName {
            name: model.name.clone(),
            reason: "name must start with a letter".into(),
        });
    }

    let mut seen = std::collections::BTreeSet::new();
    for field in &model.fields {
        if !seen.insert(field.name.as_str()) {
            return Err(DomainError::DuplicateFieldName {
                model: model.name.clone(),
                field: field.name.clone(),
            });
        }
    }

    Ok(())
}
