//! The Snake - a single-player Snake game for the terminal
//!
//! This library provides:
//! - Core game logic on a wrapping pixel grid (game module)
//! - Keyboard handling (input module)
//! - Drawing surfaces and TUI rendering (render module)
//! - The fixed-tick game loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
