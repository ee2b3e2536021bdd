//! All-or-nothing file replacement.

use std::io::Write;
use std::path::Path;

use skillindex_shared::{Result, SkillIndexError};
use tracing::debug;

/// Replace `path` with `content` via a uniquely named sibling temp file and
/// a rename.
///
/// Readers see either the old file or the new one, never a mix. The temp
/// file inherits the original's permissions and is removed on failure.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".skillindex-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| SkillIndexError::io(dir, e))?;

    temp.write_all(content.as_bytes())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| SkillIndexError::io(temp.path(), e))?;

    if let Ok(meta) = std::fs::metadata(path) {
        temp.as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| SkillIndexError::io(temp.path(), e))?;
    }

    // Dropping the PersistError drops the temp file, which deletes it.
    temp.persist(path)
        .map_err(|e| SkillIndexError::io(path, e.error))?;

    debug!(path = %path.display(), bytes = content.len(), "document replaced");
    Ok(())
}
