//! Game configuration, loadable from TOML

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::board::{Side, MAX_DIM};
use crate::error::ConfigError;

/// Who plays the side the human is not playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    /// The engine
    #[default]
    Computer,
    /// A second human at the same screen
    Human,
}

/// Settings for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: u8,
    pub cols: u8,
    /// Marks in a row needed to win
    pub win_len: u8,
    /// Side played by the (first) human
    pub human_side: Side,
    /// Whether the human side moves first
    pub human_first: bool,
    pub opponent: Opponent,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            win_len: 3,
            human_side: Side::X,
            human_first: true,
            opponent: Opponent::Computer,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.rows > MAX_DIM {
            return Err(ConfigError::Rows(self.rows));
        }
        if self.cols == 0 || self.cols > MAX_DIM {
            return Err(ConfigError::Cols(self.cols));
        }
        let max = self.rows.min(self.cols);
        if self.win_len == 0 || self.win_len > max {
            return Err(ConfigError::WinLength {
                win_len: self.win_len,
                max,
            });
        }
        Ok(())
    }

    /// Side that moves first
    #[inline]
    pub fn first_side(&self) -> Side {
        if self.human_first {
            self.human_side
        } else {
            self.human_side.opponent()
        }
    }

    /// Side the engine plays, if any
    #[inline]
    pub fn computer_side(&self) -> Option<Side> {
        match self.opponent {
            Opponent::Computer => Some(self.human_side.opponent()),
            Opponent::Human => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.first_side(), Side::X);
        assert_eq!(config.computer_side(), Some(Side::O));
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: GameConfig = toml::from_str(
            r#"
            rows = 10
            cols = 12
            win_len = 5
            human_side = "O"
            human_first = false
            "#,
        )
        .unwrap();
        assert_eq!(config.rows, 10);
        assert_eq!(config.cols, 12);
        assert_eq!(config.win_len, 5);
        assert_eq!(config.human_side, Side::O);
        assert_eq!(config.opponent, Opponent::Computer);
        assert_eq!(config.first_side(), Side::X);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_hotseat() {
        let config: GameConfig = toml::from_str(r#"opponent = "human""#).unwrap();
        assert_eq!(config.opponent, Opponent::Human);
        assert_eq!(config.computer_side(), None);
    }

    #[test]
    fn test_validation_errors() {
        let config = GameConfig { rows: 27, ..GameConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Rows(27))));

        let config = GameConfig { cols: 0, ..GameConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Cols(0))));

        let config = GameConfig { rows: 4, cols: 6, win_len: 5, ..GameConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WinLength { win_len: 5, max: 4 })
        ));
    }

    #[test]
    fn test_bad_toml() {
        assert!(toml::from_str::<GameConfig>("rows = \"three\"").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/nonexistent/mnk/config.toml");
        assert!(matches!(GameConfig::load(path), Err(ConfigError::FileRead { .. })));
        assert_eq!(GameConfig::load_or_default(path).unwrap(), GameConfig::default());
    }
}
