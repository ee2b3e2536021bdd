//! Index builder configuration.
//!
//! An optional `skillindex.toml` lives at the repository root.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillIndexError};
use crate::types::{DEFAULT_END_MARKER, DEFAULT_FILE_NAME, DEFAULT_START_MARKER, Markers, VCS_DIR};

/// Config file name, looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = "skillindex.toml";

// ---------------------------------------------------------------------------
// Config structs (matching skillindex.toml schema)
// ---------------------------------------------------------------------------

/// Top-level config file, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Index generation settings.
    #[serde(default)]
    pub index: IndexSection,
}

/// `[index]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexSection {
    /// Metadata file name that marks a skill directory.
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Target document, relative to the repository root.
    #[serde(default = "default_target")]
    pub target: String,

    /// Sentinel opening the generated region.
    #[serde(default = "default_start_marker")]
    pub start_marker: String,

    /// Sentinel closing the generated region.
    #[serde(default = "default_end_marker")]
    pub end_marker: String,

    /// Directory names skipped during the walk.
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// Drop rows whose name and description are both empty.
    #[serde(default)]
    pub skip_empty_rows: bool,
}

impl Default for IndexSection {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            target: default_target(),
            start_marker: default_start_marker(),
            end_marker: default_end_marker(),
            exclude_dirs: default_exclude_dirs(),
            skip_empty_rows: false,
        }
    }
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.into()
}
fn default_target() -> String {
    "README.md".into()
}
fn default_start_marker() -> String {
    DEFAULT_START_MARKER.into()
}
fn default_end_marker() -> String {
    DEFAULT_END_MARKER.into()
}
fn default_exclude_dirs() -> Vec<String> {
    vec![VCS_DIR.into()]
}

// ---------------------------------------------------------------------------
// Index config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Values supplied on the command line; `None` falls through to the file.
#[derive(Debug, Clone, Default)]
pub struct IndexOverrides {
    pub target: Option<PathBuf>,
    pub skip_empty_rows: Option<bool>,
}

/// Runtime index configuration, merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Repository root that is scanned.
    pub root: PathBuf,
    /// Absolute (root-joined) path of the target document.
    pub target: PathBuf,
    /// Metadata file name to discover.
    pub file_name: String,
    /// Sentinel pair delimiting the generated region.
    pub markers: Markers,
    /// Directory names skipped during the walk (always includes `.git`).
    pub exclude_dirs: Vec<String>,
    /// Drop fully blank rows from the table.
    pub skip_empty_rows: bool,
}

impl IndexConfig {
    /// Configuration with every default, rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self::resolve(root, &ConfigFile::default(), &IndexOverrides::default())
    }

    /// Merge file values and CLI overrides for the repository at `root`.
    pub fn resolve(
        root: impl Into<PathBuf>,
        file: &ConfigFile,
        overrides: &IndexOverrides,
    ) -> Self {
        let root = root.into();
        let section = &file.index;

        let target = overrides
            .target
            .clone()
            .unwrap_or_else(|| PathBuf::from(&section.target));
        let target = if target.is_absolute() {
            target
        } else {
            root.join(target)
        };

        let mut exclude_dirs = section.exclude_dirs.clone();
        if !exclude_dirs.iter().any(|d| d == VCS_DIR) {
            exclude_dirs.push(VCS_DIR.into());
        }

        Self {
            root,
            target,
            file_name: section.file_name.clone(),
            markers: Markers {
                start: section.start_marker.clone(),
                end: section.end_marker.clone(),
            },
            exclude_dirs,
            skip_empty_rows: overrides.skip_empty_rows.unwrap_or(section.skip_empty_rows),
        }
    }

    /// The resolved settings in `skillindex.toml` form, as a run sees them.
    /// The target is shown relative to the root when it lies inside it.
    pub fn to_config_file(&self) -> ConfigFile {
        let target = self
            .target
            .strip_prefix(&self.root)
            .unwrap_or(&self.target)
            .to_string_lossy()
            .into_owned();

        ConfigFile {
            index: IndexSection {
                file_name: self.file_name.clone(),
                target,
                start_marker: self.markers.start.clone(),
                end_marker: self.markers.end.clone(),
                exclude_dirs: self.exclude_dirs.clone(),
                skip_empty_rows: self.skip_empty_rows,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Load `skillindex.toml` from the repository root. Returns defaults if the file does not exist.
pub fn load_config(root: &Path) -> Result<ConfigFile> {
    let path = root.join(CONFIG_FILE_NAME);

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(ConfigFile::default());
    }

    load_config_from(&path)
}

/// Load and validate a config file from a specific path.
pub fn load_config_from(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| SkillIndexError::io(path, e))?;

    let config: ConfigFile = toml::from_str(&content).map_err(|e| {
        SkillIndexError::config(format!("failed to parse {}: {e}", path.display()))
    })?;

    validate(&config.index)?;
    Ok(config)
}

/// Write a default `skillindex.toml` at the repository root.
/// Refuses to overwrite an existing file. Returns the path written.
pub fn init_config(root: &Path) -> Result<PathBuf> {
    let path = root.join(CONFIG_FILE_NAME);
    if path.exists() {
        return Err(SkillIndexError::config(format!(
            "{} already exists",
            path.display()
        )));
    }

    let content = toml::to_string_pretty(&ConfigFile::default())
        .map_err(|e| SkillIndexError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| SkillIndexError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

fn validate(section: &IndexSection) -> Result<()> {
    if section.file_name.trim().is_empty() {
        return Err(SkillIndexError::config("index.file_name must not be empty"));
    }
    if section.start_marker.is_empty() || section.end_marker.is_empty() {
        return Err(SkillIndexError::config("index markers must not be empty"));
    }
    if section.start_marker == section.end_marker {
        return Err(SkillIndexError::config(
            "index.start_marker and index.end_marker must differ",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let toml_str = toml::to_string_pretty(&ConfigFile::default()).expect("serialize");
        assert!(toml_str.contains("file_name = \"SKILL.md\""));
        assert!(toml_str.contains("<!-- INDEX:START -->"));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[index]
target = "docs/SKILLS.md"
exclude_dirs = ["node_modules"]
"#;
        let config: ConfigFile = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.index.target, "docs/SKILLS.md");
        assert_eq!(config.index.file_name, "SKILL.md");
        assert_eq!(config.index.end_marker, DEFAULT_END_MARKER);
        assert!(!config.index.skip_empty_rows);
    }

    #[test]
    fn resolve_always_excludes_vcs_dir() {
        let mut file = ConfigFile::default();
        file.index.exclude_dirs = vec!["node_modules".into()];

        let config = IndexConfig::resolve("/repo", &file, &IndexOverrides::default());
        assert!(config.exclude_dirs.contains(&".git".to_string()));
        assert!(config.exclude_dirs.contains(&"node_modules".to_string()));
    }

    #[test]
    fn overrides_win_over_file_values() {
        let mut file = ConfigFile::default();
        file.index.skip_empty_rows = true;

        let overrides = IndexOverrides {
            target: Some(PathBuf::from("INDEX.md")),
            skip_empty_rows: Some(false),
        };
        let config = IndexConfig::resolve("/repo", &file, &overrides);
        assert_eq!(config.target, PathBuf::from("/repo/INDEX.md"));
        assert!(!config.skip_empty_rows);
    }

    #[test]
    fn config_file_view_matches_resolved_values() {
        let mut file = ConfigFile::default();
        file.index.exclude_dirs = vec!["node_modules".into()];

        let overrides = IndexOverrides {
            target: Some(PathBuf::from("docs/INDEX.md")),
            skip_empty_rows: Some(true),
        };
        let config = IndexConfig::resolve("/repo", &file, &overrides);
        let view = config.to_config_file();

        assert_eq!(view.index.exclude_dirs, vec!["node_modules", ".git"]);
        assert_eq!(view.index.target, "docs/INDEX.md");
        assert!(view.index.skip_empty_rows);

        let shown = toml::to_string_pretty(&view).expect("serialize");
        assert!(shown.contains(".git"));
    }

    #[test]
    fn config_file_view_keeps_outside_target_absolute() {
        let overrides = IndexOverrides {
            target: Some(PathBuf::from("/elsewhere/README.md")),
            skip_empty_rows: None,
        };
        let config = IndexConfig::resolve("/repo", &ConfigFile::default(), &overrides);
        assert_eq!(config.to_config_file().index.target, "/elsewhere/README.md");
    }

    #[test]
    fn default_target_is_root_readme() {
        let config = IndexConfig::with_root("/repo");
        assert_eq!(config.target, PathBuf::from("/repo/README.md"));
        assert_eq!(config.markers, Markers::default());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.index.target, "README.md");
    }

    #[test]
    fn identical_markers_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "[index]\nstart_marker = \"<!-- X -->\"\nend_marker = \"<!-- X -->\"\n",
        )
        .unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("must differ"));
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = init_config(dir.path()).unwrap();
        assert!(path.exists());

        let reloaded = load_config(dir.path()).unwrap();
        assert_eq!(reloaded.index.file_name, "SKILL.md");

        assert!(init_config(dir.path()).is_err());
    }
}
