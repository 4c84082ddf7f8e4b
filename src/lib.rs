//! blockdrop (workspace facade crate).
//!
//! Re-exports the workspace crates as `blockdrop::{core, input, term, types}`
//! and hosts the pieces of the terminal front-end that are shared by the
//! binary and the integration tests: command-line config, logging setup and
//! the [`app::App`] state machine that sits between key events and the engine.

pub mod app;
pub mod config;
pub mod logging;

pub use blockdrop_core as core;
pub use blockdrop_input as input;
pub use blockdrop_term as term;
pub use blockdrop_types as types;
