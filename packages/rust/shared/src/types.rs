//! Core domain types for the skill index.

use serde::Serialize;

/// Default start sentinel in the target document.
pub const DEFAULT_START_MARKER: &str = "<!-- INDEX:START -->";

/// Default end sentinel in the target document.
pub const DEFAULT_END_MARKER: &str = "<!-- INDEX:END -->";

/// Metadata file name that marks a skill directory.
pub const DEFAULT_FILE_NAME: &str = "SKILL.md";

/// Version-control directory that is never descended into.
pub const VCS_DIR: &str = ".git";

// ---------------------------------------------------------------------------
// Artifact
// ---------------------------------------------------------------------------

/// A discovered skill, derived fresh from its metadata file on every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// Value of the `name:` header line (empty if absent).
    pub name: String,
    /// Value of the `description:` header line (empty if absent).
    pub description: String,
    /// Directory holding the metadata file, relative to the repository root,
    /// `/`-separated.
    pub relative_path: String,
}

impl Artifact {
    /// Both metadata fields are blank.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.description.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Markers
// ---------------------------------------------------------------------------

/// The pair of sentinel literals that delimit the generated region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_MARKER.into(),
            end: DEFAULT_END_MARKER.into(),
        }
    }
}
