//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use bakery_core::{application::ports::Filesystem, error::BakeryResult};

/// Production filesystem implementation using `std::fs`.
///
/// Writes are all-or-nothing: content lands in a temporary sibling file
/// first and is renamed into place. A failed write therefore never leaves a
/// partial file that the next run's skip-check would treat as user-owned.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> BakeryResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> BakeryResult<()> {
        let tmp = temp_sibling(path);
        if let Err(e) = std::fs::write(&tmp, content) {
            // Nothing to clean up on a failed create; best effort otherwise.
            let _ = std::fs::remove_file(&tmp);
            return Err(map_io_error(path, e, "write file"));
        }
        std::fs::rename(&tmp, path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            map_io_error(path, e, "move file into place")
        })
    }

    fn line_count(&self, path: &Path) -> BakeryResult<usize> {
        let content =
            std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))?;
        Ok(content.lines().count())
    }

    fn remove_file(&self, path: &Path) -> BakeryResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }
}

/// Hidden temporary sibling in the same directory, so the final rename stays
/// on one filesystem.
fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    path.with_file_name(format!(".{name}.bake-tmp"))
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> bakery_core::error::BakeryError {
    use bakery_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
