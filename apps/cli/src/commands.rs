//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use skillindex_core::{WriteStatus, build_index, check_index, collect_artifacts};
use skillindex_markdown::{TableOptions, render_table};
use skillindex_shared::{IndexConfig, IndexOverrides, init_config, load_config};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// skillindex: keep a README's skill table in sync with SKILL.md files.
#[derive(Parser)]
#[command(
    name = "skillindex",
    version,
    about = "Regenerate the skill index table in a repository README.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Repository root to scan (defaults to the current directory).
    #[arg(long, env = "SKILLINDEX_ROOT", global = true)]
    pub root: Option<PathBuf>,

    /// Target document, relative to the root (defaults to README.md).
    #[arg(long, global = true)]
    pub target: Option<PathBuf>,

    /// Drop rows whose name and description are both empty.
    #[arg(long, global = true)]
    pub skip_empty_rows: bool,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Defaults to `build` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Regenerate the index and rewrite the target document.
    Build,

    /// Exit with an error if the target document is out of date. Never writes.
    Check,

    /// Print the discovered skills without touching the target document.
    List {
        /// Emit a JSON array instead of a markdown table.
        #[arg(long)]
        json: bool,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Write a default skillindex.toml at the repository root.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Tracing targets of this workspace: the binary plus each library crate.
const LOG_TARGETS: &[&str] = &[
    "skillindex",
    "skillindex_core",
    "skillindex_discovery",
    "skillindex_markdown",
    "skillindex_shared",
];

/// Filter directive for a `-v` count. Dependencies stay at `warn`.
fn default_filter(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let mut directive = String::from("warn");
    for target in LOG_TARGETS {
        directive.push_str(&format!(",{target}={level}"));
    }
    directive
}

/// Initialize tracing based on CLI flags. Logs go to stderr.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose)));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()
            .map_err(|e| eyre!("cannot determine working directory: {e}"))?,
    };

    let overrides = IndexOverrides {
        target: cli.target.clone(),
        skip_empty_rows: cli.skip_empty_rows.then_some(true),
    };

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => cmd_build(&resolve(root, &overrides)?),
        Command::Check => cmd_check(&resolve(root, &overrides)?),
        Command::List { json } => cmd_list(&resolve(root, &overrides)?, json),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(root),
            ConfigAction::Show => cmd_config_show(&resolve(root, &overrides)?),
        },
    }
}

/// Load `skillindex.toml` (if any) and merge the CLI overrides.
fn resolve(root: PathBuf, overrides: &IndexOverrides) -> Result<IndexConfig> {
    let file = load_config(&root)?;
    Ok(IndexConfig::resolve(root, &file, overrides))
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_build(config: &IndexConfig) -> Result<()> {
    info!(root = %config.root.display(), "building skill index");

    let outcome = build_index(config)?;
    match outcome.status {
        WriteStatus::Updated => println!(
            "Updated {} with {} skill(s)",
            outcome.target.display(),
            outcome.artifact_count
        ),
        WriteStatus::Unchanged => println!(
            "{} already up to date ({} skill(s))",
            outcome.target.display(),
            outcome.artifact_count
        ),
    }

    Ok(())
}

fn cmd_check(config: &IndexConfig) -> Result<()> {
    let outcome = check_index(config)?;
    if !outcome.up_to_date {
        return Err(eyre!(
            "{} is out of date; run `skillindex build` to regenerate it",
            outcome.target.display()
        ));
    }

    println!(
        "{} is up to date ({} skill(s))",
        outcome.target.display(),
        outcome.artifact_count
    );
    Ok(())
}

fn cmd_list(config: &IndexConfig, json: bool) -> Result<()> {
    println!("{}", render_list(config, json)?);
    Ok(())
}

/// Discovered skills as a JSON array or as the markdown table a build would write.
fn render_list(config: &IndexConfig, json: bool) -> Result<String> {
    let artifacts = collect_artifacts(config)?;

    if json {
        return Ok(serde_json::to_string_pretty(&artifacts)?);
    }

    Ok(render_table(
        &artifacts,
        &TableOptions {
            skip_empty_rows: config.skip_empty_rows,
        },
    ))
}

fn cmd_config_init(root: PathBuf) -> Result<()> {
    let path = init_config(&root)?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(config: &IndexConfig) -> Result<()> {
    println!("{}", render_config(config)?);
    Ok(())
}

/// The configuration a run would use, as TOML.
fn render_config(config: &IndexConfig) -> Result<String> {
    Ok(toml::to_string_pretty(&config.to_config_file())?)
}
