//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on rendering, terminal input, or wall-clock time:
//!
//! - **Deterministic**: the same random source produces identical games
//! - **Testable**: scripted random sources pin exact spawns
//! - **Portable**: can run headless, in a terminal, or behind any other front-end
//!
//! # Module Structure
//!
//! - [`board`]: 20x10 grid with collision detection and line clearing
//! - [`pieces`]: the seven-shape catalogue and clockwise rotation
//! - [`rng`]: injectable random sources
//! - [`scoring`]: line score, level and gravity interval rules
//! - [`clock`]: turns elapsed time into gravity steps
//! - [`game_state`]: the engine tying it all together
//! - [`snapshot`]: render-ready copy of the state
//!
//! # Game Rules
//!
//! - Shape and color are drawn independently and uniformly at spawn
//! - Rotation is clockwise only, with no wall kicks
//! - A blocked downward step locks the piece; blocked sideways moves do nothing
//! - Each cleared line scores 100; every 5 lines raise the level by one
//! - The game ends when the freshly promoted piece does not fit at its spawn
//!
//! # Example
//!
//! ```
//! use blockdrop_core::{GameState, ScriptedRandom};
//! use blockdrop_types::GameAction;
//!
//! // Every draw is 0: I pieces with color 1.
//! let mut game = GameState::with_rng(ScriptedRandom::new(vec![0]));
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//! while game.apply_action(GameAction::SoftDrop) {}
//!
//! assert_eq!(game.board().filled_count(), 4);
//! assert!(!game.is_game_over());
//! ```

pub mod board;
pub mod clock;
pub mod error;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockdrop_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::GravityClock;
pub use error::CoreError;
pub use game_state::GameState;
pub use pieces::{get_shape, Piece, Shape};
pub use rng::{RandomSource, ScriptedRandom, SimpleRng, StdRandom};
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_score};
pub use snapshot::GameSnapshot;
