//! Render-ready copy of the game state.
//!
//! Renderers read a snapshot taken after a command has fully applied, so they
//! never observe a half-finished lock/clear/spawn sequence.

use crate::pieces::Piece;
use crate::types::{COLUMNS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Locked cells; 0 is empty, otherwise the palette color index.
    pub board: [[u8; COLUMNS as usize]; ROWS as usize],
    pub active: Option<Piece>,
    pub next: Option<Piece>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; COLUMNS as usize]; ROWS as usize],
            active: None,
            next: None,
            score: 0,
            level: 1,
            lines: 0,
            game_over: false,
        }
    }
}
