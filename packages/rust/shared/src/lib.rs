//! Shared types, error model, and configuration for skillindex.
//!
//! This crate is the foundation depended on by all other skillindex crates.
//! It provides:
//! - [`SkillIndexError`], the unified error type
//! - Domain types ([`Artifact`], [`Markers`])
//! - Configuration ([`ConfigFile`], [`IndexConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    CONFIG_FILE_NAME, ConfigFile, IndexConfig, IndexOverrides, IndexSection, init_config,
    load_config, load_config_from,
};
pub use error::{Result, SkillIndexError};
pub use types::{
    Artifact, DEFAULT_END_MARKER, DEFAULT_FILE_NAME, DEFAULT_START_MARKER, Markers, VCS_DIR,
};
