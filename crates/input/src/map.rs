//! Which keys drive which actions.
//!
//! Letters match regardless of case; arrows and WASD share the four
//! directional actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

const BINDINGS: [(KeyCode, GameAction); 11] = [
    (KeyCode::Left, GameAction::MoveLeft),
    (KeyCode::Char('a'), GameAction::MoveLeft),
    (KeyCode::Right, GameAction::MoveRight),
    (KeyCode::Char('d'), GameAction::MoveRight),
    (KeyCode::Down, GameAction::MoveDown),
    (KeyCode::Char('s'), GameAction::MoveDown),
    (KeyCode::Up, GameAction::Rotate),
    (KeyCode::Char('w'), GameAction::Rotate),
    (KeyCode::Char(' '), GameAction::Shuffle),
    (KeyCode::Char('p'), GameAction::Pause),
    (KeyCode::Char('r'), GameAction::Reset),
];

fn fold_case(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Action bound to `key`, if any
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    let code = fold_case(key.code);
    BINDINGS
        .iter()
        .find(|(bound, _)| *bound == code)
        .map(|&(_, action)| action)
}

/// Q, or Ctrl-C
pub fn should_quit(key: KeyEvent) -> bool {
    match fold_case(key.code) {
        KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_binding_resolves_in_both_cases() {
        for (code, action) in BINDINGS {
            assert_eq!(handle_key_event(KeyEvent::from(code)), Some(action));
            if let KeyCode::Char(c) = code {
                let upper = KeyCode::Char(c.to_ascii_uppercase());
                assert_eq!(handle_key_event(KeyEvent::from(upper)), Some(action), "{c}");
            }
        }
    }

    #[test]
    fn test_arrows_and_wasd_agree() {
        let pairs = [
            (KeyCode::Left, 'a'),
            (KeyCode::Right, 'd'),
            (KeyCode::Down, 's'),
            (KeyCode::Up, 'w'),
        ];
        for (arrow, letter) in pairs {
            assert_eq!(
                handle_key_event(KeyEvent::from(arrow)),
                handle_key_event(KeyEvent::from(KeyCode::Char(letter)))
            );
        }
    }

    #[test]
    fn test_unbound_keys_do_nothing() {
        for code in [KeyCode::Char('x'), KeyCode::Esc, KeyCode::Enter, KeyCode::Char('q')] {
            assert_eq!(handle_key_event(KeyEvent::from(code)), None);
        }
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Esc)));
    }
}
