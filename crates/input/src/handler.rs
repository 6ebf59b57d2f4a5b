//! Key-repeat debounce for terminal environments.
//!
//! Every key event (press, repeat or release) restarts the debounce clock.
//! Presses always go through; an auto-repeat only goes through when at least
//! the debounce window passed since the previous event, so a burst of repeats
//! from the terminal cannot flood the game with moves.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::{GameAction, KEY_DEBOUNCE_MS};

/// Filters key events into game actions.
///
/// Time is supplied by the caller in milliseconds since any fixed origin.
#[derive(Debug, Clone)]
pub struct InputHandler {
    debounce_ms: u32,
    last_key_ms: Option<u64>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_debounce_ms(KEY_DEBOUNCE_MS)
    }

    pub fn with_debounce_ms(debounce_ms: u32) -> Self {
        Self {
            debounce_ms,
            last_key_ms: None,
        }
    }

    /// Decide whether an event of `kind` at `now_ms` is let through
    pub fn accept(&mut self, kind: KeyEventKind, now_ms: u64) -> bool {
        let delta = self.last_key_ms.map(|last| now_ms.saturating_sub(last));
        self.last_key_ms = Some(now_ms);

        match kind {
            KeyEventKind::Press => true,
            KeyEventKind::Repeat => delta.map_or(true, |d| d >= self.debounce_ms as u64),
            KeyEventKind::Release => false,
        }
    }

    /// Map an event to an action if it passes the debounce
    pub fn handle(&mut self, key: KeyEvent, now_ms: u64) -> Option<GameAction> {
        if !self.accept(key.kind, now_ms) {
            return None;
        }
        handle_key_event(key)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
