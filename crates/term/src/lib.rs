//! Terminal "game renderer" module.
//!
//! Paints a [`core::GameSnapshot`] into a plain framebuffer that is then
//! written to the terminal span by span. No widget toolkit is involved, which
//! keeps exact control over the 2:1 cell aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fruitris_core as core;
pub use fruitris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style, Weight};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
