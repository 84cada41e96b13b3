//! m,n,k tic-tac-toe in the terminal

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mnk::cli::Cli;
use mnk::term::Terminal;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let preset = if cli.has_settings() {
        Some(cli.game_config().context("invalid game settings")?)
    } else {
        None
    };

    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout());
    terminal.run(preset).context("terminal game failed")?;
    Ok(())
}
