use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if let Some(direction) = direction_for(key.code) {
            return KeyAction::Steer(direction);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

/// Arrow keys and WASD, either case
fn direction_for(code: KeyCode) -> Option<Direction> {
    let direction = match code {
        KeyCode::Up => Direction::Up,
        KeyCode::Down => Direction::Down,
        KeyCode::Left => Direction::Left,
        KeyCode::Right => Direction::Right,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Direction::Up,
            's' => Direction::Down,
            'a' => Direction::Left,
            'd' => Direction::Right,
            _ => return None,
        },
        _ => return None,
    };
    Some(direction)
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
