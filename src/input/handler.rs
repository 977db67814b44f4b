use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, Snake};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Quit,
    None,
}

/// Whether the loop should keep running after an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Quit,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Up => KeyAction::Steer(Direction::Up),
            KeyCode::Down => KeyAction::Steer(Direction::Down),
            KeyCode::Left => KeyAction::Steer(Direction::Left),
            KeyCode::Right => KeyAction::Steer(Direction::Right),

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }

    /// Apply an action to the snake.
    ///
    /// A steer becomes the pending direction unless it reverses the committed
    /// direction, in which case the pending slot is left as it was.
    pub fn apply(&self, action: KeyAction, snake: &mut Snake) -> InputOutcome {
        match action {
            KeyAction::Steer(dir) => {
                if !snake.direction.is_opposite(dir) {
                    snake.next_direction = Some(dir);
                }
                InputOutcome::Continue
            }
            KeyAction::Quit => InputOutcome::Quit,
            KeyAction::None => InputOutcome::Continue,
        }
    }

    /// Translate and apply a batch of key presses in order, stopping at a quit
    pub fn process<I>(&self, keys: I, snake: &mut Snake) -> InputOutcome
    where
        I: IntoIterator<Item = KeyEvent>,
    {
        for key in keys {
            let action = self.handle_key_event(key);
            if self.apply(action, snake) == InputOutcome::Quit {
                return InputOutcome::Quit;
            }
        }
        InputOutcome::Continue
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
