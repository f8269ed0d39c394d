//! Artifact kinds, target paths, and generation decisions.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Every kind of file the orchestrator can bake.
///
/// The first nine are overridable per run through the override directory;
/// the two `*Init` aggregators and the per-model base template are
/// overridable under their own reserved names as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Views,
    Urls,
    Forms,
    Admin,
    DetailTemplate,
    CreateTemplate,
    UpdateTemplate,
    ListTemplate,
    DeleteTemplate,
    BaseTemplate,
    /// App-level `views/__init__.py` aggregator.
    ViewsInit,
    /// App-level `urls/__init__.py` aggregator.
    UrlsInit,
}

impl ArtifactKind {
    /// Kinds baked once per model, in generation order.
    pub const PER_MODEL: [Self; 10] = [
        Self::Views,
        Self::Urls,
        Self::Forms,
        Self::Admin,
        Self::BaseTemplate,
        Self::ListTemplate,
        Self::DetailTemplate,
        Self::CreateTemplate,
        Self::UpdateTemplate,
        Self::DeleteTemplate,
    ];

    /// Kinds baked once per app, after all models.
    pub const AGGREGATORS: [Self; 2] = [Self::ViewsInit, Self::UrlsInit];

    /// Reserved file name in the override directory. A file under this name
    /// fully substitutes the built-in template for every model in the run.
    pub fn override_name(self) -> &'static str {
        match self {
            Self::Views => "views",
            Self::Urls => "urls",
            Self::Forms => "forms",
            Self::Admin => "admin",
            Self::DetailTemplate => "detail.html",
            Self::CreateTemplate => "create.html",
            Self::UpdateTemplate => "update.html",
            Self::ListTemplate => "list.html",
            Self::DeleteTemplate => "delete.html",
            Self::BaseTemplate => "base",
            Self::ViewsInit => "__init__views",
            Self::UrlsInit => "__init__urls",
        }
    }

    /// Target path relative to the app directory.
    ///
    /// `model_snake` is ignored by the aggregator kinds, whose path is fixed
    /// per app.
    pub fn relative_path(self, app_name: &str, model_snake: &str) -> PathBuf {
        let templates = || PathBuf::from("templates").join(app_name);
        match self {
            Self::Views => PathBuf::from("views").join(format!("{model_snake}_views.py")),
            Self::Urls => PathBuf::from("urls").join(format!("{model_snake}_urls.py")),
            Self::Forms => PathBuf::from(format!("{model_snake}_forms.py")),
            Self::Admin => PathBuf::from(format!("{model_snake}_admin.py")),
            Self::DetailTemplate => templates().join(format!("{model_snake}_detail.html")),
            Self::CreateTemplate => templates().join(format!("{model_snake}_create.html")),
            Self::UpdateTemplate => templates().join(format!("{model_snake}_update.html")),
            Self::ListTemplate => templates().join(format!("{model_snake}_list.html")),
            Self::DeleteTemplate => templates().join(format!("{model_snake}_delete.html")),
            Self::BaseTemplate => templates().join(format!("{model_snake}_base.html")),
            Self::ViewsInit => PathBuf::from("views").join("__init__.py"),
            Self::UrlsInit => PathBuf::from("urls").join("__init__.py"),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.override_name())
    }
}

/// Outcome of the per-artifact decision.
///
/// Computed fresh per run, consumed once by the orchestrator, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationDecision {
    /// Target does not exist; render and write it.
    Generate,
    /// Target exists and is (presumed) user-owned; never overwritten.
    SkipExists,
    /// Target existed as an untouched placeholder that was reclaimed; render
    /// and write as if it had never existed.
    ReclaimAndGenerate,
}

impl GenerationDecision {
    pub fn writes(self) -> bool {
        matches!(self, Self::Generate | Self::ReclaimAndGenerate)
    }
}
