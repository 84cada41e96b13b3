//! Command-line arguments shared by both binaries

use std::path::PathBuf;

use clap::Parser;

use crate::board::Side;
use crate::config::{GameConfig, Opponent};
use crate::error::ConfigError;

/// Play m,n,k tic-tac-toe against the computer or a friend.
#[derive(Debug, Parser)]
#[command(name = "mnk", version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of rows (1-26)
    #[arg(long)]
    pub rows: Option<u8>,

    /// Number of columns (1-26)
    #[arg(long)]
    pub cols: Option<u8>,

    /// Marks in a row needed to win
    #[arg(long = "win")]
    pub win_len: Option<u8>,

    /// Side played by the human: X or O
    #[arg(long)]
    pub side: Option<Side>,

    /// Let the other side move first
    #[arg(long)]
    pub second: bool,

    /// Two humans at the same screen, no computer
    #[arg(long)]
    pub hotseat: bool,
}

impl Cli {
    /// Whether any game setting came from the command line or a file
    pub fn has_settings(&self) -> bool {
        self.config.is_some()
            || self.rows.is_some()
            || self.cols.is_some()
            || self.win_len.is_some()
            || self.side.is_some()
            || self.second
            || self.hotseat
    }

    /// Load the config file (if any) and apply flag overrides on top.
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => GameConfig::load_or_default(path)?,
            None => GameConfig::default(),
        };
        let config = self.apply(base);
        config.validate()?;
        Ok(config)
    }

    fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(win_len) = self.win_len {
            config.win_len = win_len;
        }
        if let Some(side) = self.side {
            config.human_side = side;
        }
        if self.second {
            config.human_first = false;
        }
        if self.hotseat {
            config.opponent = Opponent::Human;
        }
        config
    }
}
