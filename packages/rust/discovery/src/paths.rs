//! Root-relative link computation.

use std::io;
use std::path::{Component, Path};

use skillindex_shared::{Result, SkillIndexError};

/// Express `dir` relative to `root` as a `/`-separated link target.
///
/// The output never depends on the host separator, so the rendered table is
/// identical across platforms. `dir == root` yields `"."`.
pub fn relative_link(dir: &Path, root: &Path) -> Result<String> {
    let rel = dir.strip_prefix(root).map_err(|_| {
        SkillIndexError::discovery(
            dir,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("path is outside repository root {}", root.display()),
            ),
        )
    })?;

    let segments: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if segments.is_empty() {
        return Ok(".".to_string());
    }

    Ok(segments.join("/"))
}
