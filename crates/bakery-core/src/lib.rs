//! Bakery Core - decision and merge engine for model-driven scaffolding.
//!
//! Given normalized model metadata, this crate decides what administrative
//! configuration, routing strategy, and generated artifacts each model
//! should receive, and orchestrates writing them without ever destroying a
//! user's edits.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           bakery-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (BakeService)                │
//! │   generate / skip / reclaim decisions   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, OverrideLookup, Catalog)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    bakery-adapters (Infrastructure)     │
//! │ (LocalFilesystem, DirOverrides, etc.)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Field-Rule Engine, RouteKey, kinds)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//!
//! - **Non-destructive**: an existing, non-stub file at a target path is
//!   never overwritten; re-running is idempotent.
//! - **Pure derivation**: admin configuration and route keys are recomputed
//!   fresh from field metadata on every run; nothing is persisted.
//! - **Stub reclaiming**: framework placeholder files of four lines or fewer
//!   are removed before generation decisions are made.
//!
//! ## Known limitation
//!
//! A per-app aggregator file only ever references the models of the run that
//! wrote it. Re-running to add new models to an app whose aggregator already
//! exists will not register the new models there - the aggregator is skipped
//! like any other existing file. Delete it and re-run to rebuild it from the
//! full model selection.

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AppReport, AppSpec, ArtifactFailure, BakeService, GenerationReport, ModelSpec,
        ports::{Filesystem, OverrideLookup, TemplateCatalog},
    };
    pub use crate::domain::{
        AdminConfig, ArtifactKind, FieldDescriptor, FieldTypeTag, GenerationDecision, LinkKind,
        Model, RenderContext, RouteKey, RuleOptions, TemplateSource,
    };
    pub use crate::error::{BakeryError, BakeryResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
