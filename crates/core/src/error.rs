//! Error types for the core crate.
//!
//! The simulation itself never fails: a rejected move or rotation is a normal
//! outcome, and the end of the game is reported through `GameState::is_game_over`.
//! Errors only cover malformed queries from collaborators.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("cell (row {row}, col {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },
}
