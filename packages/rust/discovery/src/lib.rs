//! Skill metadata file discovery.
//!
//! Walks the repository tree looking for files with a fixed name
//! (`SKILL.md` by default), skipping excluded directories such as `.git`.
//! The result is sorted by full path so repeated runs see the same order.

mod paths;

use std::io;
use std::path::{Path, PathBuf};

use skillindex_shared::{DEFAULT_FILE_NAME, Result, SkillIndexError, VCS_DIR};
use tracing::{debug, info, instrument, trace};

pub use paths::relative_link;

// ---------------------------------------------------------------------------
// Discovery options
// ---------------------------------------------------------------------------

/// What to look for and what to skip.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Exact file name identifying a metadata file.
    pub file_name: String,
    /// Directory names never descended into.
    pub exclude_dirs: Vec<String>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.into(),
            exclude_dirs: vec![VCS_DIR.into()],
        }
    }
}

// ---------------------------------------------------------------------------
// Main entry point
// ---------------------------------------------------------------------------

/// Find every metadata file under `root`, sorted lexicographically by path.
///
/// Zero matches is not an error. A missing or unreadable root, or any
/// directory that cannot be listed, fails with
/// [`SkillIndexError::Discovery`]. Symlinked directories are not followed.
#[instrument(skip_all, fields(root = %root.display(), file_name = %opts.file_name))]
pub fn discover(root: &Path, opts: &DiscoveryOptions) -> Result<Vec<PathBuf>> {
    let meta = std::fs::metadata(root).map_err(|e| SkillIndexError::discovery(root, e))?;
    if !meta.is_dir() {
        return Err(SkillIndexError::discovery(
            root,
            io::Error::new(io::ErrorKind::NotADirectory, "repository root is not a directory"),
        ));
    }

    let mut files = Vec::new();
    walk(root, opts, &mut files)?;
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    info!(count = files.len(), "metadata files discovered");
    Ok(files)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn walk(dir: &Path, opts: &DiscoveryOptions, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| SkillIndexError::discovery(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| SkillIndexError::discovery(dir, e))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| SkillIndexError::discovery(&path, e))?;

        let name = entry.file_name();
        let name = name.to_string_lossy();

        if file_type.is_dir() {
            if opts.exclude_dirs.iter().any(|d| d.as_str() == name) {
                debug!(path = %path.display(), "skipping excluded directory");
                continue;
            }
            walk(&path, opts, files)?;
        } else if name == opts.file_name && (file_type.is_file() || path.is_file()) {
            trace!(path = %path.display(), "found metadata file");
            files.push(path);
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
