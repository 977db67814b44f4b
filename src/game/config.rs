use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::state::Position;

/// Largest number of cells along either side of the board
pub const MAX_GRID_CELLS: i32 = 1000;

/// An RGB colour triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colours used when drawing the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    /// Outline drawn around every occupied cell
    pub border: Rgb,
    pub apple: Rgb,
    pub snake: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb(0, 0, 0),
            border: Rgb(93, 216, 228),
            apple: Rgb(255, 0, 0),
            snake: Rgb(0, 255, 0),
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the board in pixels
    pub screen_width: i32,
    /// Height of the board in pixels
    pub screen_height: i32,
    /// Side of one grid cell in pixels
    pub grid_size: i32,
    /// Game ticks per second
    pub speed: u32,
    /// Seed for apple placement; entropy when unset
    pub seed: Option<u64>,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            grid_size: 20,
            speed: 20,
            seed: None,
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size in pixels
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(200, 200)
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    /// Number of cells across the board
    pub fn grid_width(&self) -> i32 {
        self.screen_width / self.grid_size
    }

    /// Number of cells down the board
    pub fn grid_height(&self) -> i32 {
        self.screen_height / self.grid_size
    }

    /// Where the snake starts and restarts: the middle cell, rounded down on
    /// boards with an odd number of cells
    pub fn center(&self) -> Position {
        Position::new(
            self.grid_width() / 2 * self.grid_size,
            self.grid_height() / 2 * self.grid_size,
        )
    }

    /// Time between two game ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.speed.max(1)
    }

    /// Check that the board is a whole number of cells and the game can tick
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_size > 0,
            "grid_size must be positive, got {}",
            self.grid_size
        );
        ensure!(
            self.screen_width > 0 && self.screen_height > 0,
            "board must have a positive size, got {}x{}",
            self.screen_width,
            self.screen_height
        );
        ensure!(
            self.screen_width % self.grid_size == 0 && self.screen_height % self.grid_size == 0,
            "board {}x{} is not a multiple of grid_size {}",
            self.screen_width,
            self.screen_height,
            self.grid_size
        );
        ensure!(
            self.grid_width() <= MAX_GRID_CELLS && self.grid_height() <= MAX_GRID_CELLS,
            "board of {}x{} cells exceeds the {} cell limit per side",
            self.grid_width(),
            self.grid_height(),
            MAX_GRID_CELLS
        );
        ensure!(self.speed > 0, "speed must be at least 1 tick per second");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.screen_width, 640);
        assert_eq!(config.screen_height, 480);
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.speed, 20);
        assert_eq!(config.grid_width(), 32);
        assert_eq!(config.grid_height(), 24);
        assert_eq!(config.center(), Position::new(320, 240));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(300, 100);
        assert_eq!(config.grid_width(), 15);
        assert_eq!(config.grid_height(), 5);
        assert_eq!(config.tick_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_validation_rejects_ragged_board() {
        let config = GameConfig::new(650, 480);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_odd_board_center_is_on_grid() {
        let config = GameConfig::new(660, 480);
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_width(), 33);
        assert_eq!(config.center(), Position::new(320, 240));

        let config = GameConfig::new(60, 40);
        assert_eq!(config.center(), Position::new(20, 20));
        assert_eq!(config.center().x % config.grid_size, 0);
        assert_eq!(config.center().y % config.grid_size, 0);
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let config = GameConfig {
            screen_width: 40000,
            screen_height: 1,
            grid_size: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let at_limit = GameConfig {
            screen_width: MAX_GRID_CELLS,
            screen_height: MAX_GRID_CELLS,
            grid_size: 1,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_speed() {
        let config = GameConfig {
            speed: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_grid() {
        let config = GameConfig {
            grid_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "speed": 8, "palette": {{ "snake": [1, 2, 3] }} }}"#).unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.speed, 8);
        assert_eq!(config.screen_width, 640);
        assert_eq!(config.palette.snake, Rgb(1, 2, 3));
        assert_eq!(config.palette.apple, Rgb(255, 0, 0));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = GameConfig::from_file(&dir.path().join("nope.json"));
        assert!(result.is_err());
    }
}
