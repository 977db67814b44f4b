use rand::Rng;

use super::config::GameConfig;
use super::state::Position;

/// The apple the snake is chasing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apple {
    pub position: Position,
}

impl Apple {
    /// Create an apple on a random cell
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let mut apple = Self {
            position: Position::new(0, 0),
        };
        apple.randomize_position(config, rng);
        apple
    }

    /// Move the apple to a uniformly random cell.
    ///
    /// Cells under the snake are not excluded.
    pub fn randomize_position<R: Rng + ?Sized>(&mut self, config: &GameConfig, rng: &mut R) {
        self.position = Position::new(
            rng.gen_range(0..config.grid_width()) * config.grid_size,
            rng.gen_range(0..config.grid_height()) * config.grid_size,
        );
    }
}
