//! Normalized model metadata - the input side of the decision engine.
//!
//! Everything in this module is plain data handed in by the schema-extraction
//! boundary (see `bakery-adapters::schema`). The rule engine never inspects a
//! live schema: by the time a [`Model`] reaches the core, every native field
//! type has been mapped into the closed [`FieldTypeTag`] enum and anything the
//! engine does not recognize has been coerced to [`FieldTypeTag::Opaque`].
//!
//! ## Ordering
//!
//! A model's field sequence reflects declaration order in the source schema.
//! That order is user-visible (it drives `list_display` and `list_filter`) and
//! must never be re-sorted by name or type.

use serde::{Deserialize, Serialize};

/// Closed set of field kinds the rule engine understands.
///
/// Native schema types (e.g. `CharField`, `OneToOneField`) are mapped into
/// this enum *before* crossing the input boundary. An unmapped native type
/// becomes [`Self::Opaque`], which participates in `list_display` (it is still
/// a declared field) and in no other rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldTypeTag {
    Text,
    LongText,
    Slug,
    Boolean,
    NullableBoolean,
    Integer,
    Decimal,
    Date,
    DateTime,
    Time,
    Url,
    Email,
    RegionCode,
    File,
    Image,
    ForeignKey,
    OneToOne,
    ManyToMany,
    /// Anything outside the recognized set. Excluded from all rule matching.
    Opaque,
}

impl FieldTypeTag {
    /// `true` for the relation kinds that benefit from eager loading
    /// (`foreign-key` and `one-to-one`; `many-to-many` is deliberately not
    /// included - it cannot be joined in a single row).
    pub fn is_single_relation(self) -> bool {
        matches!(self, Self::ForeignKey | Self::OneToOne)
    }

    /// `true` if a value of this type is safe to embed in a URL path segment
    /// and usable as a human-readable row identifier.
    pub fn is_slug_compatible(self) -> bool {
        matches!(self, Self::Slug)
    }
}

/// Normalized view of one model field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,

    #[serde(rename = "type")]
    pub type_tag: FieldTypeTag,

    #[serde(default)]
    pub nullable: bool,

    #[serde(default)]
    pub unique: bool,

    /// The field carries an enumerated set of allowed values.
    #[serde(default)]
    pub has_enumerated_choices: bool,

    /// Number of rows on the related side. Only meaningful for relation
    /// fields; `None` means unknown and never satisfies a count-bounded rule.
    #[serde(default)]
    pub related_object_count: Option<u64>,
}

impl FieldDescriptor {
    /// Convenience constructor used heavily in tests and manifest loading.
    pub fn new(name: impl Into<String>, type_tag: FieldTypeTag) -> Self {
        Self {
            name: name.into(),
            type_tag,
            nullable: false,
            unique: false,
            has_enumerated_choices: false,
            related_object_count: None,
        }
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn with_choices(mut self) -> Self {
        self.has_enumerated_choices = true;
        self
    }

    pub fn with_related_count(mut self, count: u64) -> Self {
        self.related_object_count = Some(count);
        self
    }
}

/// One data entity type, carrying an ordered list of fields.
///
/// The identity field (primary key) is excluded from `fields`; it is
/// addressable separately through [`RouteKey::PrimaryKey`].
///
/// [`RouteKey::PrimaryKey`]: super::route::RouteKey::PrimaryKey
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// PascalCase entity name, e.g. `PumpernickelBread`.
    pub name: String,

    /// Fields in declaration order, primary key excluded.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,

    /// Display plural. Defaults to `name + "s"` when not provided.
    #[serde(default)]
    pub verbose_name_plural: Option<String>,
}

impl Model {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
            verbose_name_plural: None,
        }
    }

    /// snake_case form of the model name, used in generated file names and
    /// identifiers (`PumpernickelBread` -> `pumpernickel_bread`).
    pub fn name_snake(&self) -> String {
        to_snake_case(&self.name)
    }

    /// Pluralized display name. Adds an `s` unless the schema supplied an
    /// explicit plural.
    pub fn name_plural(&self) -> String {
        self.verbose_name_plural
            .clone()
            .unwrap_or_else(|| format!("{}s", self.name))
    }

    pub fn name_plural_snake(&self) -> String {
        to_snake_case(&self.name_plural())
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

// ============================================================================
// String Case Conversion
// ============================================================================

/// Convert a string to snake_case.
///
/// Handles the identifier forms that show up in schema metadata:
/// `MyModel` -> `my_model`, `HTTPLog` -> `http_log`, `my-model` -> `my_model`.
pub fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

/// Split a string into lowercase words on separators, camelCase transitions,
/// and acronym boundaries (`Upper Upper Lower` splits before the last upper).
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        // Explicit separators always end the current word
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(next) = chars.peek() {
            // camelCase transition: "myApp" -> "my" + "App"
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            // Acronym boundary: "HTTPLog" -> "HTTP" + "Log"
            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}
