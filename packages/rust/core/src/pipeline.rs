//! End-to-end index regeneration.
//!
//! `discover -> parse headers -> render table -> splice -> write`.
//! Every fallible step runs before the single write at the end, so a
//! failure anywhere leaves the target document untouched.

use std::path::{Path, PathBuf};
use std::time::Instant;

use skillindex_discovery::{DiscoveryOptions, discover, relative_link};
use skillindex_markdown::{TableOptions, parse_header, render_table, splice};
use skillindex_shared::{Artifact, IndexConfig, Result, SkillIndexError};
use tracing::{debug, info, instrument};

use crate::writer::write_atomic;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Whether `build_index` touched the target document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    /// New content was written.
    Updated,
    /// The document already held the current table; nothing was written.
    Unchanged,
}

/// Output from a successful build.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    /// Document that was (or would have been) rewritten.
    pub target: PathBuf,
    /// Number of artifacts discovered.
    pub artifact_count: usize,
    pub status: WriteStatus,
}

/// Output from a check run.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub target: PathBuf,
    pub artifact_count: usize,
    /// The document already matches what a build would write.
    pub up_to_date: bool,
}

/// A fully computed document, not yet written anywhere.
#[derive(Debug, Clone)]
pub struct Regenerated {
    pub artifacts: Vec<Artifact>,
    /// Document text as read from disk.
    pub current: String,
    /// Document text with the table spliced in.
    pub updated: String,
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Regenerate the index and write it to the target document when it changed.
#[instrument(skip_all, fields(root = %config.root.display(), target = %config.target.display()))]
pub fn build_index(config: &IndexConfig) -> Result<BuildOutcome> {
    let started = Instant::now();
    let regen = regenerate(config)?;

    let status = if regen.updated == regen.current {
        debug!("document already up to date, skipping write");
        WriteStatus::Unchanged
    } else {
        write_atomic(&config.target, &regen.updated)?;
        WriteStatus::Updated
    };

    info!(
        artifacts = regen.artifacts.len(),
        ?status,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "index build complete"
    );

    Ok(BuildOutcome {
        target: config.target.clone(),
        artifact_count: regen.artifacts.len(),
        status,
    })
}

/// Regenerate the index in memory and compare it with the document on disk.
/// Never writes.
#[instrument(skip_all, fields(root = %config.root.display(), target = %config.target.display()))]
pub fn check_index(config: &IndexConfig) -> Result<CheckOutcome> {
    let regen = regenerate(config)?;
    let up_to_date = regen.updated == regen.current;

    info!(artifacts = regen.artifacts.len(), up_to_date, "index check complete");

    Ok(CheckOutcome {
        target: config.target.clone(),
        artifact_count: regen.artifacts.len(),
        up_to_date,
    })
}

/// Run every step except the write.
pub fn regenerate(config: &IndexConfig) -> Result<Regenerated> {
    let artifacts = collect_artifacts(config)?;

    let table = render_table(
        &artifacts,
        &TableOptions {
            skip_empty_rows: config.skip_empty_rows,
        },
    );

    let current = std::fs::read_to_string(&config.target)
        .map_err(|e| SkillIndexError::io(&config.target, e))?;
    let updated = splice(&current, &config.markers, &table)?;

    Ok(Regenerated {
        artifacts,
        current,
        updated,
    })
}

/// Discover and parse every artifact under the configured root, in path order.
#[instrument(skip_all, fields(root = %config.root.display()))]
pub fn collect_artifacts(config: &IndexConfig) -> Result<Vec<Artifact>> {
    let opts = DiscoveryOptions {
        file_name: config.file_name.clone(),
        exclude_dirs: config.exclude_dirs.clone(),
    };

    discover(&config.root, &opts)?
        .iter()
        .map(|file| load_artifact(file, &config.root))
        .collect()
}

/// Build an [`Artifact`] from one metadata file.
pub fn load_artifact(file: &Path, root: &Path) -> Result<Artifact> {
    let content = std::fs::read_to_string(file).map_err(|e| SkillIndexError::io(file, e))?;
    let header = parse_header(&content);

    let dir = file.parent().unwrap_or(root);
    let relative_path = relative_link(dir, root)?;

    debug!(
        path = %relative_path,
        name = %header.name,
        "loaded artifact"
    );

    Ok(Artifact {
        name: header.name,
        description: header.description,
        relative_path,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_artifact_reads_header_and_path() {
        let dir = tempfile::tempdir().unwrap();
        let skill_dir = dir.path().join("skills").join("api-first");
        std::fs::create_dir_all(&skill_dir).unwrap();
        let file = skill_dir.join("SKILL.md");
        std::fs::write(
            &file,
            "---\nname: api-first\ndescription: Contract before code\n---\n",
        )
        .unwrap();

        let artifact = load_artifact(&file, dir.path()).unwrap();
        assert_eq!(artifact.name, "api-first");
        assert_eq!(artifact.description, "Contract before code");
        assert_eq!(artifact.relative_path, "skills/api-first");
    }

    #[test]
    fn load_artifact_at_root_links_to_dot() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("SKILL.md");
        std::fs::write(&file, "name: root-skill\n").unwrap();

        let artifact = load_artifact(&file, dir.path()).unwrap();
        assert_eq!(artifact.relative_path, ".");
        assert_eq!(artifact.description, "");
    }

    #[test]
    fn regenerate_reports_current_and_spliced_text() {
        let dir = tempfile::tempdir().unwrap();
        let doc = "<!-- INDEX:START -->\nold\n<!-- INDEX:END -->\n";
        std::fs::write(dir.path().join("README.md"), doc).unwrap();

        let regen = regenerate(&IndexConfig::with_root(dir.path())).unwrap();
        assert!(regen.artifacts.is_empty());
        assert_eq!(regen.current, doc);
        assert_eq!(
            regen.updated,
            "<!-- INDEX:START -->\n| Artifact | Description |\n| --- | --- |\n<!-- INDEX:END -->\n"
        );
    }

    #[test]
    fn missing_target_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = IndexConfig::with_root(dir.path());

        let err = regenerate(&config).unwrap_err();
        match err {
            SkillIndexError::Io { path, .. } => assert_eq!(path, dir.path().join("README.md")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
