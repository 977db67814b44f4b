//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Positions are in pixels and the board wraps around at its edges.

pub mod action;
pub mod apple;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use apple::Apple;
pub use config::{GameConfig, Palette, Rgb};
pub use engine::{GameEngine, TickInfo};
pub use state::{MoveOutcome, Position, Snake};
