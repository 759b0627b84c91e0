//! sync-ide-folders: points users at the canonical planning-with-files sources
//!
//! Syncing into IDE-specific folders has been retired. Only the canonical
//! source in skills/planning-with-files/ is maintained, and IDE integration
//! is done by copying files manually.

use anyhow::{Context, Result};
use clap::Parser;

use sync_ide_folders::guidance;

/// Accepts and drops every argument, `--help` and `--version` included
#[derive(Parser, Default)]
#[command(name = "sync-ide-folders")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    _ignored: Vec<String>,
}

fn main() -> Result<()> {
    // Arguments never change the output
    let _cli = Cli::try_parse().unwrap_or_default();

    guidance::print().context("Failed to write guidance to stdout")?;

    Ok(())
}
