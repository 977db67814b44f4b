pub mod handler;

pub use handler::{InputHandler, InputOutcome, KeyAction};
