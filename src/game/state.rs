use anyhow::{Result, ensure};

use super::action::Direction;
use super::config::GameConfig;

/// A position on the board, in pixels
///
/// Positions produced by the game are always multiples of the cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move one cell in a direction, wrapping around the board edges
    pub fn wrapped_step(&self, direction: Direction, config: &GameConfig) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: (self.x + dx * config.grid_size).rem_euclid(config.screen_width),
            y: (self.y + dy * config.grid_size).rem_euclid(config.screen_height),
        }
    }
}

/// What happened when the snake moved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The head advanced one cell
    Moved,
    /// The head ran into the body and the snake was reset
    Collided,
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
    /// Direction to commit on the next tick
    pub next_direction: Option<Direction>,
    /// Length the snake grows toward; the tail is trimmed past it
    pub length: usize,
}

impl Snake {
    /// Create a one-cell snake at the board center heading right
    pub fn new(config: &GameConfig) -> Self {
        Self {
            body: vec![config.center()],
            direction: Direction::Right,
            next_direction: None,
            length: 1,
        }
    }

    /// Create a snake with an explicit body; the target length is the body length
    pub fn from_body(body: Vec<Position>, direction: Direction) -> Result<Self> {
        ensure!(!body.is_empty(), "snake body must have at least one segment");
        Ok(Self {
            length: body.len(),
            body,
            direction,
            next_direction: None,
        })
    }

    /// Get the head position
    pub fn get_head_position(&self) -> Position {
        self.body[0]
    }

    /// Commit the pending direction, if any
    pub fn update_direction(&mut self) {
        if let Some(direction) = self.next_direction.take() {
            self.direction = direction;
        }
    }

    /// Advance the head one cell, trimming the tail beyond the target length
    ///
    /// Running into any segment behind the head resets the snake instead of moving.
    pub fn move_snake(&mut self, config: &GameConfig) -> MoveOutcome {
        let new_head = self.get_head_position().wrapped_step(self.direction, config);

        if self.body[1..].contains(&new_head) {
            self.reset(config);
            return MoveOutcome::Collided;
        }

        self.body.insert(0, new_head);
        if self.body.len() > self.length {
            self.body.pop();
        }

        MoveOutcome::Moved
    }

    /// Put the snake back to its starting state
    pub fn reset(&mut self, config: &GameConfig) {
        self.length = 1;
        self.body.clear();
        self.body.push(config.center());
        self.direction = Direction::Right;
        self.next_direction = None;
    }

    /// Get the number of segments
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(cells: &[(i32, i32)]) -> Vec<Position> {
        cells.iter().map(|&(x, y)| Position::new(x, y)).collect()
    }

    #[test]
    fn test_starting_state() {
        let snake = Snake::new(&GameConfig::default());
        assert_eq!(snake.body, positions(&[(320, 240)]));
        assert_eq!(snake.length, 1);
        assert_eq!(snake.direction, Direction::Right);
        assert_eq!(snake.next_direction, None);
    }

    #[test]
    fn test_empty_body_rejected() {
        assert!(Snake::from_body(Vec::new(), Direction::Up).is_err());
    }

    #[test]
    fn test_move_drops_tail() {
        let config = GameConfig::default();
        let mut snake = Snake::from_body(
            positions(&[(100, 100), (80, 100), (60, 100)]),
            Direction::Right,
        )
        .unwrap();

        assert_eq!(snake.move_snake(&config), MoveOutcome::Moved);
        assert_eq!(snake.body, positions(&[(120, 100), (100, 100), (80, 100)]));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_move_grows_one_cell_per_tick() {
        let config = GameConfig::default();
        let mut snake = Snake::new(&config);
        snake.length = 3;

        snake.move_snake(&config);
        assert_eq!(snake.len(), 2);
        snake.move_snake(&config);
        assert_eq!(snake.len(), 3);
        snake.move_snake(&config);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.get_head_position(), Position::new(380, 240));
    }

    #[test]
    fn test_wrap_right_edge() {
        let config = GameConfig::default();
        let mut snake = Snake::from_body(positions(&[(620, 100)]), Direction::Right).unwrap();
        snake.move_snake(&config);
        assert_eq!(snake.get_head_position(), Position::new(0, 100));
    }

    #[test]
    fn test_wrap_left_and_top_edges() {
        let config = GameConfig::default();
        let origin = Position::new(0, 0);
        assert_eq!(
            origin.wrapped_step(Direction::Left, &config),
            Position::new(620, 0)
        );
        assert_eq!(
            origin.wrapped_step(Direction::Up, &config),
            Position::new(0, 460)
        );
        assert_eq!(
            Position::new(0, 460).wrapped_step(Direction::Down, &config),
            origin
        );
    }

    #[test]
    fn test_self_collision_resets() {
        let config = GameConfig::default();
        let mut snake = Snake::from_body(
            positions(&[(100, 100), (120, 100), (100, 100)]),
            Direction::Right,
        )
        .unwrap();
        snake.next_direction = Some(Direction::Up);

        assert_eq!(snake.move_snake(&config), MoveOutcome::Collided);
        assert_eq!(snake.body, positions(&[(320, 240)]));
        assert_eq!(snake.length, 1);
        assert_eq!(snake.direction, Direction::Right);
        assert_eq!(snake.next_direction, None);
    }

    #[test]
    fn test_moving_onto_own_tail_cell_collides() {
        // The tail has not been trimmed yet when the new head is checked
        let config = GameConfig::default();
        let mut snake = Snake::from_body(
            positions(&[(100, 100), (120, 100), (120, 120), (100, 120)]),
            Direction::Down,
        )
        .unwrap();

        assert_eq!(snake.move_snake(&config), MoveOutcome::Collided);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_update_direction_commits_once() {
        let mut snake = Snake::new(&GameConfig::default());
        snake.next_direction = Some(Direction::Up);

        snake.update_direction();
        assert_eq!(snake.direction, Direction::Up);
        assert_eq!(snake.next_direction, None);

        let before = snake.clone();
        snake.update_direction();
        assert_eq!(snake, before);
    }

    #[test]
    fn test_each_turn_moves_one_cell() {
        let config = GameConfig::default();
        for dir in Direction::ALL {
            if dir.is_opposite(Direction::Right) {
                continue;
            }
            let mut snake = Snake::new(&config);
            snake.next_direction = Some(dir);
            snake.update_direction();
            snake.move_snake(&config);

            let (dx, dy) = dir.delta();
            assert_eq!(
                snake.get_head_position(),
                Position::new(320 + dx * 20, 240 + dy * 20)
            );
        }
    }
}
