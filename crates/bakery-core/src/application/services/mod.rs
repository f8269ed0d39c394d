pub mod bake_service;
pub mod reclaim;

pub use bake_service::{
    AppReport, AppSpec, ArtifactFailure, BakeService, GenerationReport, ModelSpec,
};
pub use reclaim::{STUB_LINE_THRESHOLD, reclaim};
