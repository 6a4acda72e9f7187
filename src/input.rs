//! Input module - keyboard mapping for game controls
//!
//! Pure key-to-action mapping; no engine state and no repeat handling.
//! One key press is one action, including soft drop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Map a keyboard event to a game action.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::Rotate),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SoftDrop),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Check if a key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::SoftDrop)
        );
    }

    #[test]
    fn test_rotate_and_restart_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(GameAction::Rotate)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
