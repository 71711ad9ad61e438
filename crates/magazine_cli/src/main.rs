//! Command-line reader for the magazine core.
//!
//! Each invocation opens the database, performs one action and prints the
//! resulting section. The session persists in the database between runs.

mod cli;
mod commands;
mod render;

use anyhow::{Context, Result};
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| magazine_core::default_log_level().to_string());
        magazine_core::init_logging(&level, log_dir).context("failed to initialize logging")?;
    }

    commands::run(cli)
}
