//! Legacy-stub reclaiming.
//!
//! Framework `startapp`-style scaffolding leaves tiny placeholder modules
//! behind (`views.py`, `admin.py`, ...). Left in place they shadow the
//! artifacts this tool bakes, but deleting user code is out of the question.
//! The compromise is a line-count heuristic: a file at or under the
//! threshold is presumed never edited and safe to remove; anything larger is
//! left untouched and the corresponding artifact is skipped as a
//! manual-action-required condition.

use std::path::Path;

use tracing::debug;

use crate::application::ports::Filesystem;
use crate::error::BakeryResult;

/// Placeholder files start at four lines; a fifth means someone typed.
pub const STUB_LINE_THRESHOLD: usize = 4;

/// Remove the file at `path` iff it exists and is an untouched placeholder.
///
/// Returns whether the file was removed. Must run *before* the generation
/// decision for any artifact the stub shadows, so that a subsequent
/// `Generate` is not mistaken for `SkipExists`.
pub fn reclaim(fs: &dyn Filesystem, path: &Path) -> BakeryResult<bool> {
    if !fs.exists(path) {
        return Ok(false);
    }

    let lines = fs.line_count(path)?;
    if lines > STUB_LINE_THRESHOLD {
        debug!(
            path = %path.display(),
            lines,
            "file exceeds stub threshold, leaving untouched"
        );
        return Ok(false);
    }

    fs.remove_file(path)?;
    debug!(path = %path.display(), lines, "reclaimed legacy stub");
    Ok(true)
}
