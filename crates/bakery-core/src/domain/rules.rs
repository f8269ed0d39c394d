//! Field-Rule Engine: derives administrative configuration from field
//! metadata.
//!
//! [`AdminConfig::compute`] is a pure function `(&Model, &RuleOptions) ->
//! AdminConfig` - deterministic, no I/O, no shared state. It is recomputed
//! fresh for every model on every run; nothing here is ever persisted.
//!
//! ## Precedence
//!
//! Each derived sequence follows the same precedence:
//!
//! 1. An `explicit_*` option, when given, is taken **verbatim** and no rule
//!    runs for that sequence.
//! 2. Otherwise the type-driven rule produces field names in declaration
//!    order.
//! 3. `extra_*` entries are appended at the end.
//!
//! Every append is deduplicated: a name already present is not re-appended,
//! and first-occurrence order is preserved.
//!
//! ## Rule configuration
//!
//! [`RuleOptions`] replaces a runtime attribute-lookup pattern with an
//! explicit configuration struct passed by reference into the pure rule
//! function. Defaults match the behavior most admin screens want; a schema
//! manifest may override any of them per model.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::model::{FieldTypeTag, Model};

/// How a `list_display` entry should be rendered as a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKind {
    /// Link to the URL the field's value points at.
    Url,
    /// Link to the related object's admin change page.
    ForeignKey,
}

/// Per-model configuration for the rule engine.
///
/// All fields have defaults; a default-constructed `RuleOptions` reproduces
/// the out-of-the-box behavior described in the module docs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleOptions {
    /// Eagerly select every foreign-key and one-to-one field in list views.
    pub include_all_select_related: bool,

    /// Appended to the derived `list_display` (deduplicated).
    pub extra_list_display: Vec<String>,

    /// When given, used verbatim as `list_display`; no rule runs.
    pub explicit_list_display: Option<Vec<String>>,

    /// Field types that are always filterable.
    pub list_by_types: BTreeSet<FieldTypeTag>,

    /// A foreign-key field is filterable only while the related table stays
    /// below this row count; a dropdown over thousands of rows is useless.
    pub max_related_objects: u64,

    pub extra_list_filter: Vec<String>,
    pub explicit_list_filter: Option<Vec<String>>,

    /// Field types included in text search.
    pub search_by_types: BTreeSet<FieldTypeTag>,

    pub extra_search_fields: Vec<String>,
    pub explicit_search_fields: Option<Vec<String>>,

    /// Render URL fields in `list_display` as hyperlinks.
    pub link_url_fields: bool,

    /// Render relation fields in `list_display` as links to the related
    /// object's change page.
    pub link_foreign_key_fields: bool,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            include_all_select_related: true,
            extra_list_display: Vec::new(),
            explicit_list_display: None,
            list_by_types: BTreeSet::from([
                FieldTypeTag::Boolean,
                FieldTypeTag::NullableBoolean,
                FieldTypeTag::RegionCode,
            ]),
            max_related_objects: 100,
            extra_list_filter: Vec::new(),
            explicit_list_filter: None,
            search_by_types: BTreeSet::from([FieldTypeTag::Text, FieldTypeTag::LongText]),
            extra_search_fields: Vec::new(),
            explicit_search_fields: None,
            link_url_fields: true,
            link_foreign_key_fields: true,
        }
    }
}

/// Derived administrative configuration for one model.
///
/// Owned exclusively by the invocation that computed it; the orchestrator
/// consumes it once per model per run and discards it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdminConfig {
    /// Relation fields to eager-load in list views. Set semantics with
    /// deterministic (declaration) order.
    pub list_select_related: Vec<String>,

    /// Columns shown in the list view, deduplicated, insertion order.
    pub list_display: Vec<String>,

    /// Sidebar filters, deduplicated, declaration order then extras.
    pub list_filter: Vec<String>,

    /// Fields included in text search.
    pub search_fields: Vec<String>,

    /// `list_display` members rendered as links, and how.
    pub linked_fields: BTreeMap<String, LinkKind>,
}

impl AdminConfig {
    /// Run every rule against `model` and return the derived configuration.
    pub fn compute(model: &Model, options: &RuleOptions) -> Self {
        Self {
            list_select_related: select_related(model, options),
            list_display: list_display(model, options),
            list_filter: list_filter(model, options),
            search_fields: search_fields(model, options),
            linked_fields: linked_fields(model, options),
        }
    }
}

// ── Individual rules ──────────────────────────────────────────────────────────

fn select_related(model: &Model, options: &RuleOptions) -> Vec<String> {
    if !options.include_all_select_related {
        return Vec::new();
    }
    // Nullability is irrelevant here: a nullable relation still joins.
    dedup_preserving_order(
        model
            .fields
            .iter()
            .filter(|f| f.type_tag.is_single_relation())
            .map(|f| f.name.clone()),
    )
}

fn list_display(model: &Model, options: &RuleOptions) -> Vec<String> {
    if let Some(explicit) = &options.explicit_list_display {
        return explicit.clone();
    }
    dedup_preserving_order(
        model
            .fields
            .iter()
            .filter(|f| f.type_tag != FieldTypeTag::ManyToMany)
            .map(|f| f.name.clone())
            .chain(options.extra_list_display.iter().cloned()),
    )
}

fn list_filter(model: &Model, options: &RuleOptions) -> Vec<String> {
    if let Some(explicit) = &options.explicit_list_filter {
        return explicit.clone();
    }
    let matches_rule = |f: &&super::model::FieldDescriptor| {
        f.has_enumerated_choices
            || options.list_by_types.contains(&f.type_tag)
            || (f.type_tag == FieldTypeTag::ForeignKey
                // Unknown related count never matches.
                && f.related_object_count
                    .is_some_and(|count| count < options.max_related_objects))
    };
    dedup_preserving_order(
        model
            .fields
            .iter()
            .filter(matches_rule)
            .map(|f| f.name.clone())
            .chain(options.extra_list_filter.iter().cloned()),
    )
}

fn search_fields(model: &Model, options: &RuleOptions) -> Vec<String> {
    if let Some(explicit) = &options.explicit_search_fields {
        return explicit.clone();
    }
    dedup_preserving_order(
        model
            .fields
            .iter()
            .filter(|f| options.search_by_types.contains(&f.type_tag))
            .map(|f| f.name.clone())
            .chain(options.extra_search_fields.iter().cloned()),
    )
}

fn linked_fields(model: &Model, options: &RuleOptions) -> BTreeMap<String, LinkKind> {
    let display = list_display(model, options);
    let mut linked = BTreeMap::new();

    for name in &display {
        let Some(field) = model.field(name) else {
            // Extras may name things that are not declared fields (computed
            // columns); those can never be linked.
            continue;
        };
        // URL linking is evaluated first; a field receives at most one kind.
        if options.link_url_fields && field.type_tag == FieldTypeTag::Url {
            linked.insert(name.clone(), LinkKind::Url);
        } else if options.link_foreign_key_fields && field.type_tag.is_single_relation() {
            linked.insert(name.clone(), LinkKind::ForeignKey);
        }
    }

    linked
}

/// Remove duplicates from a name sequence while preserving first-occurrence
/// order.
fn dedup_preserving_order(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut result = Vec::new();
    for name in names {
        if seen.insert(name.clone()) {
            result.push(name);
        }
    }
    result
}
