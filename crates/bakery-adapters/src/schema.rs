//! Schema manifest loading - the normalized input boundary.
//!
//! Live schema extraction is someone else's job; the engine consumes
//! already-normalized model metadata. This module reads that metadata from a
//! TOML manifest and maps every native field type string into the closed
//! [`FieldTypeTag`] enum - anything unmapped is coerced to `opaque` before
//! it crosses into the core.
//!
//! ## Manifest shape
//!
//! ```toml
//! [[apps]]
//! name = "pastries"
//! # path defaults to the app name, relative to the project root
//!
//! [[apps.models]]
//! name = "Tart"
//!
//! [[apps.models.fields]]
//! name = "name"
//! type = "SlugField"   # native name or kebab-case tag, case-insensitive
//! unique = true
//!
//! [apps.models.admin]  # optional rule overrides, all fields defaulted
//! max_related_objects = 50
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use bakery_core::{
    application::{AppSpec, ModelSpec},
    domain::{FieldDescriptor, FieldTypeTag, Model, RuleOptions},
    error::{BakeryError, BakeryResult},
};

/// Top-level manifest document.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub apps: Vec<ManifestApp>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestApp {
    pub name: String,

    /// App directory relative to the project root; defaults to `name`.
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default)]
    pub models: Vec<ManifestModel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestModel {
    pub name: String,

    #[serde(default)]
    pub verbose_name_plural: Option<String>,

    #[serde(default)]
    pub fields: Vec<ManifestField>,

    /// Per-model rule configuration; every field has a default.
    #[serde(default)]
    pub admin: Option<RuleOptions>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestField {
    pub name: String,

    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default)]
    pub nullable: bool,

    #[serde(default)]
    pub unique: bool,

    #[serde(default)]
    pub choices: bool,

    #[serde(default)]
    pub related_count: Option<u64>,

    /// Framework-managed timestamp fields (`auto_now` etc.) are excluded
    /// from the field sequence handed to the engine, like the identity
    /// field.
    #[serde(default)]
    pub auto_managed: bool,
}

impl Manifest {
    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> BakeryResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| BakeryError::Configuration {
            message: format!("cannot read schema manifest {}: {}", path.display(), e),
        })?;
        Self::parse(&raw).map_err(|e| BakeryError::Configuration {
            message: format!("invalid schema manifest {}: {}", path.display(), e),
        })
    }

    /// Parse manifest text (exposed for tests).
    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Find an app entry by name.
    pub fn app(&self, name: &str) -> Option<&ManifestApp> {
        self.apps.iter().find(|a| a.name == name)
    }
}

impl ManifestApp {
    /// Directory of this app under the project root.
    pub fn dir(&self, project_root: &Path) -> PathBuf {
        match &self.path {
            Some(p) => project_root.join(p),
            None => project_root.join(&self.name),
        }
    }

    /// Convert into an [`AppSpec`], keeping only the models whose names
    /// appear in `selected` (or all models when `selected` is `None`).
    ///
    /// Unknown model names are the caller's problem; this function assumes
    /// the selection was validated against [`ManifestModel::name`] already.
    pub fn to_app_spec(&self, project_root: &Path, selected: Option<&[String]>) -> AppSpec {
        let models = self
            .models
            .iter()
            .filter(|m| selected.is_none_or(|names| names.iter().any(|n| n == &m.name)))
            .map(ManifestModel::to_model_spec)
            .collect();

        AppSpec {
            app_name: self.name.clone(),
            root: self.dir(project_root),
            models,
        }
    }
}

impl ManifestModel {
    fn to_model_spec(&self) -> ModelSpec {
        let fields = self
            .fields
            .iter()
            .filter(|f| !f.auto_managed)
            .map(ManifestField::to_descriptor)
            .collect();

        let mut model = Model::new(self.name.clone(), fields);
        model.verbose_name_plural = self.verbose_name_plural.clone();

        ModelSpec {
            model,
            options: self.admin.clone().unwrap_or_default(),
        }
    }
}

impl ManifestField {
    fn to_descriptor(&self) -> FieldDescriptor {
        FieldDescriptor {
            name: self.name.clone(),
            type_tag: map_type_tag(&self.type_name),
            nullable: self.nullable,
            unique: self.unique,
            has_enumerated_choices: self.choices,
            related_object_count: self.related_count,
        }
    }
}

/// Map a native type string into the closed tag set.
///
/// Accepts both framework field-class names (`CharField`) and the engine's
/// own kebab-case tags (`text`), case-insensitively. Everything else is
/// coerced to `opaque`.
pub fn map_type_tag(name: &str) -> FieldTypeTag {
    use FieldTypeTag::*;
    let normalized = name.to_ascii_lowercase();
    match normalized.as_str() {
        "charfield" | "text" => Text,
        "textfield" | "long-text" => LongText,
        "slugfield" | "slug" => Slug,
        "booleanfield" | "boolean" => Boolean,
        "nullbooleanfield" | "nullable-boolean" => NullableBoolean,
        "integerfield" | "bigintegerfield" | "smallintegerfield" | "positiveintegerfield"
        | "integer" => Integer,
        "decimalfield" | "floatfield" | "decimal" => Decimal,
        "datefield" | "date" => Date,
        "datetimefield" | "date-time" => DateTime,
        "timefield" | "time" => Time,
        "urlfield" | "url" => Url,
        "emailfield" | "email" => Email,
        "usstatefield" | "region-code" => RegionCode,
        "filefield" | "file" => File,
        "imagefield" | "image" => Image,
        "foreignkey" | "foreign-key" => ForeignKey,
        "onetoonefield" | "one-to-one" => OneToOne,
        "manytomanyfield" | "many-to-many" => ManyToMany,
        other => {
            debug!(type_name = other, "unrecognized field type, treating as opaque");
            Opaque
        }
    }
}
