//! skillindex CLI: regenerate the skill table in a repository README.
//!
//! Scans every `SKILL.md` for its `name:` / `description:` header and
//! rewrites the region between the index markers in the target document.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
