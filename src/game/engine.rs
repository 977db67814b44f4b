use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use super::{
    apple::Apple,
    config::GameConfig,
    state::{MoveOutcome, Snake},
};

/// Information about a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInfo {
    /// Whether the snake ate the apple this tick
    pub ate_apple: bool,
    /// Whether the snake ran into itself and was reset
    pub collided: bool,
}

/// The game engine that owns the board state and runs the per-tick logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
    pub snake: Snake,
    pub apple: Apple,
}

impl GameEngine {
    /// Create a new game engine, seeding apple placement from the config if set
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create an engine with an explicit random source
    pub fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = Snake::new(&config);
        let apple = Apple::new(&config, &mut rng);

        Self {
            config,
            rng,
            snake,
            apple,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Execute one tick of game logic: commit direction, move, eat
    ///
    /// The apple check runs after the move even when the move reset the snake,
    /// so an apple sitting on the collision cell is not eaten.
    pub fn tick(&mut self) -> TickInfo {
        self.snake.update_direction();

        let outcome = self.snake.move_snake(&self.config);
        let collided = outcome == MoveOutcome::Collided;
        if collided {
            info!("Snake ran into itself, starting over");
        }

        let ate_apple = self.snake.get_head_position() == self.apple.position;
        if ate_apple {
            self.snake.length += 1;
            self.apple.randomize_position(&self.config, &mut self.rng);
            debug!(
                length = self.snake.length,
                x = self.apple.position.x,
                y = self.apple.position.y,
                "Apple eaten, relocated"
            );
        }

        trace!(
            head_x = self.snake.get_head_position().x,
            head_y = self.snake.get_head_position().y,
            "tick"
        );

        TickInfo {
            ate_apple,
            collided,
        }
    }
}
