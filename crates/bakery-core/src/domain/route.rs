//! Slug/Key Selector: picks the routing identifier for a model.

use serde::Serialize;

use super::model::Model;

/// How detail/update/delete routes address one row of a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RouteKey {
    /// Route by the named unique slug field.
    Slug(String),
    /// Route by the identity field.
    PrimaryKey,
}

impl RouteKey {
    /// Scan the model for fields that are simultaneously unique and of a
    /// slug-compatible type. Exactly one candidate wins; zero or several
    /// resolve conservatively to the always-valid primary key - the selector
    /// never guesses among multiple candidates and never errors.
    pub fn select(model: &Model) -> Self {
        let mut candidates = model
            .fields
            .iter()
            .filter(|f| f.unique && f.type_tag.is_slug_compatible());

        match (candidates.next(), candidates.next()) {
            (Some(only), None) => Self::Slug(only.name.clone()),
            _ => Self::PrimaryKey,
        }
    }

    /// Name of the lookup field as it appears in generated code.
    pub fn lookup_field(&self) -> &str {
        match self {
            Self::Slug(name) => name,
            Self::PrimaryKey => "pk",
        }
    }

    /// URL path-converter fragment for the lookup, e.g. `slug:name` or
    /// `int:pk`.
    pub fn url_pattern(&self) -> String {
        match self {
            Self::Slug(name) => format!("slug:{name}"),
            Self::PrimaryKey => "int:pk".to_string(),
        }
    }
}
