//! Terminal rendering for the game.
//!
//! A small, game-oriented rendering layer: `GameView` paints a core
//! `GameSnapshot` into a framebuffer, and `TerminalRenderer` flushes that
//! framebuffer through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockdrop_core as core;
pub use blockdrop_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Phase, Viewport, MAX_CELL_SIZE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
