use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Restart,
    Quit,
    None,
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
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Steer(Direction::Up),
            KeyCode::Down => KeyAction::Steer(Direction::Down),
            KeyCode::Left => KeyAction::Steer(Direction::Left),
            KeyCode::Right => KeyAction::Steer(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Steer(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Steer(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Steer(Direction::Right),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Key actions gathered between two frames
///
/// Direction keys seen during the frame count as held together and fold to
/// one direction with [`Direction::resolve_pressed`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrameInput {
    pressed: Vec<Direction>,
    pub restart: bool,
    pub quit: bool,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, action: KeyAction) {
        match action {
            KeyAction::Steer(direction) => {
                if !self.pressed.contains(&direction) {
                    self.pressed.push(direction);
                }
            }
            KeyAction::Restart => self.restart = true,
            KeyAction::Quit => self.quit = true,
            KeyAction::None => {}
        }
    }

    /// The single direction command for this frame, if any
    pub fn direction(&self) -> Option<Direction> {
        Direction::resolve_pressed(&self.pressed)
    }

    /// Take the gathered input, leaving an empty one for the next frame
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}
