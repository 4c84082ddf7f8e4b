//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] plus the few
//! front-end controls the runner owns itself (start gate, pause, quit). Only
//! key presses matter; every press is one discrete intent.

pub mod map;

pub use blockdrop_types as types;

pub use map::{handle_key_event, is_pause_key, is_start_key, should_quit};
