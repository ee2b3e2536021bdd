//! Error types for skillindex.
//!
//! Library crates use [`SkillIndexError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all skillindex operations.
///
/// A missing metadata field is deliberately absent from this enum: it is
/// absorbed as an empty value during extraction.
#[derive(Debug, thiserror::Error)]
pub enum SkillIndexError {
    /// Filesystem traversal failed (missing root, unreadable directory).
    #[error("discovery error at {path:?}: {source}")]
    Discovery {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The target document lacks a sentinel marker.
    #[error("marker not found: {marker}")]
    MarkerNotFound { marker: String },

    /// Filesystem I/O error on a specific file.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SkillIndexError>;

impl SkillIndexError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a marker error naming the literal that could not be located.
    pub fn marker_not_found(marker: impl Into<String>) -> Self {
        Self::MarkerNotFound {
            marker: marker.into(),
        }
    }

    /// Wrap a traversal failure with the directory being walked.
    pub fn discovery(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Discovery {
            path: path.into(),
            source,
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = SkillIndexError::marker_not_found("<!-- INDEX:START -->");
        assert_eq!(err.to_string(), "marker not found: <!-- INDEX:START -->");

        let err = SkillIndexError::config("unknown field `colour`");
        assert_eq!(err.to_string(), "config error: unknown field `colour`");
    }

    #[test]
    fn io_errors_name_the_path() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SkillIndexError::io("/repo/README.md", source);
        assert!(err.to_string().contains("/repo/README.md"));

        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = SkillIndexError::discovery("/repo/skills", source);
        assert!(err.to_string().starts_with("discovery error"));
        assert!(err.to_string().contains("/repo/skills"));
    }
}
