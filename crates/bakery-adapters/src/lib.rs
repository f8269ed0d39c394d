//! Infrastructure adapters for Bakery.
//!
//! This crate implements the ports defined in `bakery-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod overrides;
pub mod schema;

// Re-export commonly used adapters
pub use builtin_templates::BuiltinTemplates;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use overrides::{DirOverrides, NoOverrides};
pub use schema::Manifest;
