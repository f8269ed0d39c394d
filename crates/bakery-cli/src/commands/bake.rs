//! Implementation of the `bakery bake` command.
//!
//! Responsibility: translate CLI arguments into `AppSpec`s, call the core
//! bake service, and display the report. No decision logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use bakery_adapters::{BuiltinTemplates, DirOverrides, LocalFilesystem, Manifest};
use bakery_core::application::{AppSpec, BakeService, GenerationReport};

use crate::{
    cli::{BakeArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One `app[:Model,...]` token, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BakeTarget {
    pub app: String,
    /// `None` selects every model in the app.
    pub models: Option<Vec<String>>,
}

/// Execute the `bakery bake` command.
///
/// Dispatch sequence:
/// 1. Parse the `app[:Model,...]` tokens
/// 2. Load the schema manifest and resolve each token against it
/// 3. Run the bake service (or its dry-run twin)
/// 4. Render the report; artifact failures become a non-zero exit
#[instrument(skip_all, fields(targets = args.targets.len()))]
pub fn execute(
    args: BakeArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Parse targets
    let targets = parse_targets(&args.targets)?;

    // 2. Load manifest and resolve selections
    let schema_path = args.schema.unwrap_or(config.defaults.schema);
    let manifest = Manifest::load(&schema_path).map_err(CliError::Core)?;
    let root = args.root.unwrap_or(config.defaults.root);
    let specs = resolve_targets(&manifest, &targets, &root)?;

    debug!(
        schema = %schema_path.display(),
        root = %root.display(),
        apps = specs.len(),
        "targets resolved"
    );

    // 3. Bake
    let overrides_dir = args.overrides.unwrap_or(config.defaults.overrides_dir);
    let service = BakeService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(DirOverrides::new(overrides_dir)),
        Box::new(BuiltinTemplates::new()),
    );

    if args.dry_run {
        output.info("Dry run: no files will be written or removed")?;
    }
    let report = service.bake(&specs, args.dry_run).map_err(CliError::Core)?;
    info!(
        generated = report.total_generated(),
        skipped = report.total_skipped(),
        reclaimed = report.total_reclaimed(),
        "bake completed"
    );

    // 4. Report
    render_report(&report, &output, args.dry_run)?;

    if report.has_failures() {
        let count = report.apps.iter().map(|a| a.failures.len()).sum();
        return Err(CliError::ArtifactFailures { count });
    }
    Ok(())
}

// ── Target parsing ────────────────────────────────────────────────────────────

/// Parse `app[:Model1,Model2,...]` tokens.
pub fn parse_targets(tokens: &[String]) -> CliResult<Vec<BakeTarget>> {
    tokens.iter().map(|token| parse_target(token)).collect()
}

fn parse_target(token: &str) -> CliResult<BakeTarget> {
    let mut parts = token.split(':');
    let app = parts.next().unwrap_or_default();
    let models = parts.next();

    if app.is_empty() {
        return Err(CliError::InvalidTarget {
            token: token.into(),
            reason: "app name is empty".into(),
        });
    }
    if parts.next().is_some() {
        return Err(CliError::InvalidTarget {
            token: token.into(),
            reason: "too many ':' separators".into(),
        });
    }

    let models = match models {
        None => None,
        Some(list) => {
            let names: Vec<String> = list
                .split(',')
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(String::from)
                .collect();
            if names.is_empty() {
                return Err(CliError::InvalidTarget {
                    token: token.into(),
                    reason: "model list after ':' is empty".into(),
                });
            }
            Some(names)
        }
    };

    Ok(BakeTarget {
        app: app.to_string(),
        models,
    })
}

/// Resolve parsed targets against the manifest, validating every name.
fn resolve_targets(
    manifest: &Manifest,
    targets: &[BakeTarget],
    root: &PathBuf,
) -> CliResult<Vec<AppSpec>> {
    let mut specs = Vec::with_capacity(targets.len());

    for target in targets {
        let app = manifest.app(&target.app).ok_or_else(|| CliError::UnknownApp {
            app: target.app.clone(),
            available: manifest.apps.iter().map(|a| a.name.clone()).collect(),
        })?;

        if let Some(models) = &target.models {
            for name in models {
                if !app.models.iter().any(|m| &m.name == name) {
                    return Err(CliError::UnknownModel {
                        app: target.app.clone(),
                        model: name.clone(),
                        available: app.models.iter().map(|m| m.name.clone()).collect(),
                    });
                }
            }
        }

        specs.push(app.to_app_spec(root, target.models.as_deref()));
    }

    Ok(specs)
}

// ── Report rendering ──────────────────────────────────────────────────────────

fn render_report(
    report: &GenerationReport,
    output: &OutputManager,
    dry_run: bool,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(report).map_err(|e| CliError::ConfigError {
            message: format!("cannot serialize report: {e}"),
            source: Some(Box::new(e)),
        })?;
        output.print(&json)?;
        return Ok(());
    }

    let verb = if dry_run { "would bake" } else { "baked" };
    for app in &report.apps {
        output.header(&app.app_name)?;
        for path in &app.generated {
            output.success(&format!("{verb} {}", path.display()))?;
        }
        for path in &app.reclaimed {
            output.info(&format!("reclaimed stub {}", path.display()))?;
        }
        for path in &app.skipped {
            output.info(&format!("{} already exists, skipping", path.display()))?;
        }
        for failure in &app.failures {
            output.error(&format!("{}: {}", failure.path.display(), failure.reason))?;
        }
        output.print(&format!(
            "  {} generated, {} skipped, {} reclaimed, {} failed",
            app.generated.len(),
            app.skipped.len(),
            app.reclaimed.len(),
            app.failures.len()
        ))?;
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
