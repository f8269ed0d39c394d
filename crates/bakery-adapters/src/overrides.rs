//! Override directory lookup.
//!
//! A project may substitute any built-in template by dropping a file under
//! the artifact kind's reserved name into the override directory (default
//! `bakery_overrides/`). Presence of the file fully replaces the built-in
//! for every model in the run; there is no partial merge.

use std::path::PathBuf;

use tracing::debug;

use bakery_core::{
    application::{ApplicationError, ports::OverrideLookup},
    domain::{ArtifactKind, TemplateSource},
    error::BakeryResult,
};

/// Override lookup backed by a project-level directory.
#[derive(Debug, Clone)]
pub struct DirOverrides {
    dir: PathBuf,
}

impl DirOverrides {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, kind: ArtifactKind) -> PathBuf {
        self.dir.join(kind.override_name())
    }
}

impl OverrideLookup for DirOverrides {
    fn has_override(&self, kind: ArtifactKind) -> bool {
        let present = self.path_for(kind).is_file();
        if present {
            debug!(kind = %kind, dir = %self.dir.display(), "override registered");
        }
        present
    }

    fn load_override(&self, kind: ArtifactKind) -> BakeryResult<TemplateSource> {
        let path = self.path_for(kind);
        match std::fs::read_to_string(&path) {
            Ok(body) => Ok(TemplateSource::Owned(body)),
            Err(e) => Err(ApplicationError::OverrideUnreadable {
                kind: kind.to_string(),
                reason: format!("{}: {}", path.display(), e),
            }
            .into()),
        }
    }
}

/// Lookup that never has an override; every artifact uses the built-in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl OverrideLookup for NoOverrides {
    fn has_override(&self, _kind: ArtifactKind) -> bool {
        false
    }

    fn load_override(&self, kind: ArtifactKind) -> BakeryResult<TemplateSource> {
        Err(ApplicationError::OverrideUnreadable {
            kind: kind.to_string(),
            reason: "no override registered".into(),
        }
        .into())
    }
}
