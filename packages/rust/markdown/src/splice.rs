//! Replace the generated region of a document.

use skillindex_shared::{Markers, Result, SkillIndexError};
use tracing::warn;

/// Replace the text strictly between the first start marker and the first
/// end marker after it with `table`.
///
/// Both markers stay in place, each separated from the table by a single
/// newline. Everything before the start marker and from the end marker on
/// is copied unchanged. Fails with [`SkillIndexError::MarkerNotFound`] when
/// the start marker is absent or no end marker follows it.
pub fn splice(document: &str, markers: &Markers, table: &str) -> Result<String> {
    let start = document
        .find(&markers.start)
        .ok_or_else(|| SkillIndexError::marker_not_found(&markers.start))?;
    let region_start = start + markers.start.len();

    let region_end = document[region_start..]
        .find(&markers.end)
        .map(|offset| region_start + offset)
        .ok_or_else(|| SkillIndexError::marker_not_found(&markers.end))?;

    if document.matches(markers.start.as_str()).count() > 1
        || document.matches(markers.end.as_str()).count() > 1
    {
        warn!(
            start = %markers.start,
            end = %markers.end,
            "markers appear more than once; replacing the first region only"
        );
    }

    let mut out = String::with_capacity(document.len() + table.len());
    out.push_str(&document[..region_start]);
    out.push('\n');
    out.push_str(table);
    out.push('\n');
    out.push_str(&document[region_end..]);
    Ok(out)
}
