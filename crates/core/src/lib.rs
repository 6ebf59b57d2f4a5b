//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of a falling-block puzzle where every block cell
//! carries a fruit. Full rows clear as in classic line-clearing games, and so do
//! runs of three or more equal fruits along a row or column.
//!
//! It has **zero dependencies** on UI, input devices, or I/O:
//!
//! - **Deterministic**: the same seed produces the same pieces and fruit
//! - **Single-threaded**: every call runs to completion; there is nothing to lock
//! - **Read-only views**: renderers consume [`GameSnapshot`] and never touch state
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of fruit cells, row 0 at the bottom
//! - [`piece`]: shape table, rotation about the anchor, per-cell fruit
//! - [`collision`]: per-side obstruction probes and `classify`
//! - [`resolve`]: lock merge, row clearing, fruit streaks, compaction
//! - [`game_state`]: the drop scheduler tying it all together
//! - [`rng`]: seedable LCG for shapes and fruit
//! - [`snapshot`]: copyable views for rendering
//!
//! # Example
//!
//! ```
//! use fruitris_core::GameState;
//! use fruitris_types::{GameAction, DROP_INTERVAL_MS};
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Shuffle);
//! let row = game.piece().row;
//!
//! // Gravity moves the piece one row per interval
//! assert!(game.tick(DROP_INTERVAL_MS));
//! assert_eq!(game.piece().row, row - 1);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod piece;
pub mod resolve;
pub mod rng;
pub mod snapshot;

pub use fruitris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{classify, fits, is_blocked, Collision, Side};
pub use game_state::{GameConfig, GameState, Phase};
pub use piece::{Offset, Piece, PIVOT};
pub use resolve::{resolve, resolve_pass, Axis, ResolveReport, Streak};
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, PieceSnapshot};
