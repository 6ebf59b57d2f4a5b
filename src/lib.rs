//! Fruitris (workspace facade crate).
//!
//! Re-exports the engine crates under `fruitris::{core,input,term,types}` and
//! hosts the pieces only the binary needs: environment configuration and the
//! optional lock-event log.

pub mod config;
pub mod event_log;

pub use fruitris_core as core;
pub use fruitris_input as input;
pub use fruitris_term as term;
pub use fruitris_types as types;

pub use config::AppConfig;
pub use event_log::EventLog;
