//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the orchestrator needs from external systems.
//! The `bakery-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ArtifactKind, TemplateSource};
use crate::error::BakeryResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `bakery_adapters::filesystem::LocalFilesystem` (production)
/// - `bakery_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Write atomicity
///
/// `write_file` must be all-or-nothing: implementations write to a temporary
/// location and atomically move the result into place. A failed write must
/// never leave a partial file at `path` - the skip-check on the next run
/// would treat it as an existing, user-owned artifact.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> BakeryResult<()>;

    /// Write content to a file, atomically.
    fn write_file(&self, path: &Path, content: &str) -> BakeryResult<()>;

    /// Number of lines in the file at `path`.
    fn line_count(&self, path: &Path) -> BakeryResult<usize>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> BakeryResult<()>;
}

/// Port for user-supplied template overrides.
///
/// Implemented by:
/// - `bakery_adapters::overrides::DirOverrides` (project override directory)
/// - `bakery_adapters::overrides::NoOverrides` (always built-in)
///
/// An override, when present, replaces the built-in template for its kind
/// completely - there is no partial merge.
#[cfg_attr(test, mockall::automock)]
pub trait OverrideLookup: Send + Sync {
    /// Whether an override is registered for `kind`.
    fn has_override(&self, kind: ArtifactKind) -> bool;

    /// Load the override body for `kind`.
    ///
    /// Only called after `has_override` returned `true`; an unreadable file
    /// at that point is a configuration error, not a fallback condition.
    fn load_override(&self, kind: ArtifactKind) -> BakeryResult<TemplateSource>;
}

/// Port for the built-in template bodies that ship with the tool.
///
/// Implemented by `bakery_adapters::builtin_templates::BuiltinTemplates`.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateCatalog: Send + Sync {
    /// The default template body for `kind`.
    fn builtin(&self, kind: ArtifactKind) -> TemplateSource;
}
