//! Bake Service - main application orchestrator.
//!
//! Drives the per-(app, model, artifact) decision loop:
//!
//! 1. Reclaim legacy placeholder modules once per app
//! 2. Derive each model's admin configuration and route key (pure)
//! 3. Decide generate/skip/replace per artifact and write on generate
//! 4. Bake the per-app aggregators from the models of this run
//!
//! The one guarantee everything here bends around: an existing, non-stub
//! file is never overwritten. Skipping is the expected steady state, not an
//! error.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, OverrideLookup, TemplateCatalog},
    domain::{
        ArtifactKind, GenerationDecision, Model, RenderContext, RouteKey, RuleOptions,
        TemplateSource, rules::AdminConfig, validate_app_name, validate_model,
    },
    error::{BakeryError, BakeryResult},
};

use super::reclaim::reclaim;

/// One model selected for baking, with its rule configuration.
#[derive(Debug, Clone)]
pub struct ModelSpec {
    pub model: Model,
    pub options: RuleOptions,
}

impl ModelSpec {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            options: RuleOptions::default(),
        }
    }
}

/// One app selected for baking: a name, a directory, and the models chosen
/// for this run (possibly a user-filtered subset of the app's schema).
#[derive(Debug, Clone)]
pub struct AppSpec {
    pub app_name: String,
    /// App directory; all artifact paths are relative to it.
    pub root: PathBuf,
    pub models: Vec<ModelSpec>,
}

/// A single artifact that could not be written or resolved.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Per-app outcome counts, accumulated as the run progresses.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppReport {
    pub app_name: String,
    pub generated: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub reclaimed: Vec<PathBuf>,
    pub failures: Vec<ArtifactFailure>,
}

impl AppReport {
    fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            ..Self::default()
        }
    }
}

/// Outcome of a whole run, surfaced to the caller.
///
/// Skips are informational; only `failures` indicate anything went wrong.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    pub apps: Vec<AppReport>,
}

impl GenerationReport {
    pub fn total_generated(&self) -> usize {
        self.apps.iter().map(|a| a.generated.len()).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.apps.iter().map(|a| a.skipped.len()).sum()
    }

    pub fn total_reclaimed(&self) -> usize {
        self.apps.iter().map(|a| a.reclaimed.len()).sum()
    }

    pub fn has_failures(&self) -> bool {
        self.apps.iter().any(|a| !a.failures.is_empty())
    }
}

/// Legacy entry modules checked once per app. The first two shadow the baked
/// `views/` and `urls/` packages; the rest are plain framework leftovers.
const LEGACY_STUBS: [&str; 4] = ["views.py", "urls.py", "admin.py", "tests.py"];

/// Main baking service.
///
/// Owns the driven ports; all decisions flow through [`Self::bake`].
pub struct BakeService {
    fs: Box<dyn Filesystem>,
    overrides: Box<dyn OverrideLookup>,
    catalog: Box<dyn TemplateCatalog>,
}

impl BakeService {
    pub fn new(
        fs: Box<dyn Filesystem>,
        overrides: Box<dyn OverrideLookup>,
        catalog: Box<dyn TemplateCatalog>,
    ) -> Self {
        Self {
            fs,
            overrides,
            catalog,
        }
    }

    /// Bake every app in order and return the accumulated report.
    ///
    /// With `dry_run` set, decisions are computed against the real
    /// filesystem state but nothing is written or removed.
    ///
    /// # Errors
    ///
    /// Only malformed input (invalid app or model names) aborts the run.
    /// Per-artifact filesystem and override failures are recorded in the
    /// report and processing continues.
    #[instrument(skip_all, fields(apps = apps.len(), dry_run))]
    pub fn bake(&self, apps: &[AppSpec], dry_run: bool) -> BakeryResult<GenerationReport> {
        let mut report = GenerationReport::default();

        for spec in apps {
            validate_app_name(&spec.app_name).map_err(BakeryError::Domain)?;
            for ms in &spec.models {
                validate_model(&ms.model).map_err(BakeryError::Domain)?;
            }

            let app_report = self.bake_app(spec, dry_run);
            info!(
                app = %spec.app_name,
                generated = app_report.generated.len(),
                skipped = app_report.skipped.len(),
                reclaimed = app_report.reclaimed.len(),
                failures = app_report.failures.len(),
                "app baked"
            );
            report.apps.push(app_report);
        }

        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Per-app flow
    // -------------------------------------------------------------------------

    #[instrument(skip_all, fields(app = %spec.app_name))]
    fn bake_app(&self, spec: &AppSpec, dry_run: bool) -> AppReport {
        let mut report = AppReport::new(&spec.app_name);

        // Package directories must exist before anything lands in them. A
        // failure here dooms every artifact of the app; record it once and
        // move on to the next app.
        if !dry_run {
            for dir in [
                PathBuf::from("views"),
                PathBuf::from("urls"),
                Path::new("templates").join(&spec.app_name),
            ] {
                let path = spec.root.join(dir);
                if let Err(e) = self.fs.create_dir_all(&path) {
                    report.failures.push(ArtifactFailure {
                        path,
                        reason: e.to_string(),
                    });
                    return report;
                }
            }
        }

        // Legacy stubs go first: a leftover `views.py` would shadow the baked
        // `views/` package. An over-threshold entry module blocks its
        // aggregator instead of being guessed about.
        let mut views_blocked = false;
        let mut urls_blocked = false;
        let mut views_reclaimed = false;
        let mut urls_reclaimed = false;
        for stub in LEGACY_STUBS {
            let path = spec.root.join(stub);
            let removed = self.reclaim_stub(&path, dry_run, &mut report);
            let blocked = self.fs.exists(&path) && !removed;
            match stub {
                "views.py" => (views_blocked, views_reclaimed) = (blocked, removed),
                "urls.py" => (urls_blocked, urls_reclaimed) = (blocked, removed),
                _ => {}
            }
        }

        // Per-model artifacts.
        for ms in &spec.models {
            self.bake_model(spec, ms, dry_run, &mut report);
        }

        // Aggregators reference the models of *this run* only. A model baked
        // in an earlier run is invisible here; see the documented limitation
        // in the crate docs.
        let run_models: Vec<&Model> = spec.models.iter().map(|ms| &ms.model).collect();
        let app_ctx = RenderContext::for_app(&spec.app_name, &run_models);
        for (kind, blocked, entry_reclaimed) in [
            (ArtifactKind::ViewsInit, views_blocked, views_reclaimed),
            (ArtifactKind::UrlsInit, urls_blocked, urls_reclaimed),
        ] {
            let target = spec.root.join(kind.relative_path(&spec.app_name, ""));
            if blocked {
                // The legacy module stayed; generating the package init would
                // produce two competing modules. Manual action required.
                report.skipped.push(target);
                continue;
            }
            let decision = if self.fs.exists(&target) {
                GenerationDecision::SkipExists
            } else if entry_reclaimed {
                GenerationDecision::ReclaimAndGenerate
            } else {
                GenerationDecision::Generate
            };
            self.apply(kind, &target, decision, &app_ctx, dry_run, &mut report);
        }

        report
    }

    fn bake_model(
        &self,
        spec: &AppSpec,
        ms: &ModelSpec,
        dry_run: bool,
        report: &mut AppReport,
    ) {
        let admin = AdminConfig::compute(&ms.model, &ms.options);
        let route = RouteKey::select(&ms.model);
        debug!(
            model = %ms.model.name,
            route = ?route,
            list_display = admin.list_display.len(),
            list_filter = admin.list_filter.len(),
            "derived model configuration"
        );

        let ctx = RenderContext::for_model(&spec.app_name, &ms.model, &admin, &route);
        let snake = ms.model.name_snake();

        for kind in ArtifactKind::PER_MODEL {
            let target = spec.root.join(kind.relative_path(&spec.app_name, &snake));
            let decision = if self.fs.exists(&target) {
                GenerationDecision::SkipExists
            } else {
                GenerationDecision::Generate
            };
            self.apply(kind, &target, decision, &ctx, dry_run, report);
        }
    }

    /// Act on one decision: render-and-write on generate, record otherwise.
    fn apply(
        &self,
        kind: ArtifactKind,
        target: &Path,
        decision: GenerationDecision,
        ctx: &RenderContext,
        dry_run: bool,
        report: &mut AppReport,
    ) {
        if !decision.writes() {
            debug!(path = %target.display(), "exists, skipping");
            report.skipped.push(target.to_path_buf());
            return;
        }

        let source = match self.resolve_template(kind) {
            Ok(source) => source,
            Err(e) => {
                report.failures.push(ArtifactFailure {
                    path: target.to_path_buf(),
                    reason: e.to_string(),
                });
                return;
            }
        };

        let content = ctx.render(source.as_str());
        if dry_run {
            report.generated.push(target.to_path_buf());
            return;
        }

        match self.write_artifact(target, &content) {
            Ok(()) => report.generated.push(target.to_path_buf()),
            Err(e) => report.failures.push(ArtifactFailure {
                path: target.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }

    /// Template Resolution: the override for a kind, when registered,
    /// replaces the built-in completely. Evaluated independently per
    /// artifact; identical within one run by construction.
    fn resolve_template(&self, kind: ArtifactKind) -> BakeryResult<TemplateSource> {
        if self.overrides.has_override(kind) {
            self.overrides.load_override(kind)
        } else {
            Ok(self.catalog.builtin(kind))
        }
    }

    fn write_artifact(&self, target: &Path, content: &str) -> BakeryResult<()> {
        if let Some(parent) = target.parent() {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.write_file(target, content)
    }

    /// Run the reclaimer for one legacy path, recording the outcome. Errors
    /// while probing are recorded as failures and treated as "not removed".
    fn reclaim_stub(&self, path: &Path, dry_run: bool, report: &mut AppReport) -> bool {
        let outcome = if dry_run {
            self.would_reclaim(path)
        } else {
            reclaim(self.fs.as_ref(), path)
        };
        match outcome {
            Ok(true) => {
                report.reclaimed.push(path.to_path_buf());
                true
            }
            Ok(false) => false,
            Err(e) => {
                report.failures.push(ArtifactFailure {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
                false
            }
        }
    }

    /// Dry-run twin of [`reclaim`]: same decision, no removal.
    fn would_reclaim(&self, path: &Path) -> BakeryResult<bool> {
        if !self.fs.exists(path) {
            return Ok(false);
        }
        Ok(self.fs.line_count(path)? <= super::reclaim::STUB_LINE_THRESHOLD)
    }
}
