//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and filters
//! auto-repeat bursts. It never touches game state; the runner applies the
//! resulting actions.

pub mod handler;
pub mod map;

pub use fruitris_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
