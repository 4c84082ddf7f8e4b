//! Key mapping from terminal events to game actions.
//!
//! Letter keys are matched case-insensitively. Arrows, vi keys (`hjkl`) and
//! `wasd` all drive the same four actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Lowercased character of a letter key, if the event is one.
fn letter(key: KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    let action = match key.code {
        KeyCode::Left => GameAction::MoveLeft,
        KeyCode::Right => GameAction::MoveRight,
        KeyCode::Down => GameAction::SoftDrop,
        KeyCode::Up => GameAction::Rotate,
        _ => match letter(key)? {
            'h' | 'a' => GameAction::MoveLeft,
            'l' | 'd' => GameAction::MoveRight,
            'j' | 's' => GameAction::SoftDrop,
            'k' | 'w' => GameAction::Rotate,
            _ => return None,
        },
    };
    Some(action)
}

/// Key that leaves the start screen.
pub fn is_start_key(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter)
}

/// Key that toggles pause while playing.
pub fn is_pause_key(key: KeyEvent) -> bool {
    letter(key) == Some('p')
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.code == KeyCode::Esc {
        return true;
    }
    match letter(key) {
        Some('q') => true,
        Some('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn every_binding_maps_to_its_action() {
        let bindings = [
            (GameAction::MoveLeft, KeyCode::Left, ['h', 'a']),
            (GameAction::MoveRight, KeyCode::Right, ['l', 'd']),
            (GameAction::SoftDrop, KeyCode::Down, ['j', 's']),
            (GameAction::Rotate, KeyCode::Up, ['k', 'w']),
        ];
        for (action, arrow, letters) in bindings {
            assert_eq!(handle_key_event(press(arrow)), Some(action));
            for c in letters {
                for code in [KeyCode::Char(c), KeyCode::Char(c.to_ascii_uppercase())] {
                    assert_eq!(handle_key_event(press(code)), Some(action), "{:?}", code);
                }
            }
        }
    }

    #[test]
    fn unbound_keys_are_ignored() {
        for code in [KeyCode::Char('z'), KeyCode::Char(' '), KeyCode::Tab, KeyCode::Enter] {
            assert_eq!(handle_key_event(press(code)), None, "{:?}", code);
        }
    }

    #[test]
    fn front_end_controls() {
        assert!(is_start_key(press(KeyCode::Char(' '))));
        assert!(is_start_key(press(KeyCode::Enter)));
        assert!(!is_start_key(press(KeyCode::Left)));

        assert!(is_pause_key(press(KeyCode::Char('P'))));
        assert!(!is_pause_key(press(KeyCode::Char('o'))));

        assert!(should_quit(press(KeyCode::Char('Q'))));
        assert!(should_quit(press(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!should_quit(press(KeyCode::Char('c'))));
    }
}
