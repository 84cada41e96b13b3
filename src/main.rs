//! m,n,k tic-tac-toe GUI
//!
//! A window for playing against the computer or another player at the same
//! screen.

use std::io;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mnk::cli::Cli;
use mnk::ui::MnkApp;
use mnk::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let show_setup = !cli.has_settings();
    let config = cli.game_config().context("invalid game settings")?;
    let session = Session::new(config).context("could not start a game")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("m,n,k Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "mnk",
        options,
        Box::new(move |cc| Ok(Box::new(MnkApp::new(cc, session, show_setup)))),
    )
    .map_err(|e| anyhow!("window failed: {e}"))
}
