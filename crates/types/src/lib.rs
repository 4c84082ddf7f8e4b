//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield is derived from a 300x600 pixel viewport at 30 pixel cells:
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//!
//! # Gravity
//!
//! Drop interval in milliseconds per row, by level:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 500ms |
//! | 2 | 470ms |
//! | 3 | 440ms |
//! | ... | -30ms per level |
//! | 16+ | 50ms (floor) |
//!
//! # Examples
//!
//! ```
//! use blockdrop_types::{ColorIndex, PieceKind, COLUMNS, ROWS};
//!
//! assert_eq!(PieceKind::ALL[2], PieceKind::T);
//! assert_eq!(PieceKind::T.to_string(), "T");
//!
//! let color = ColorIndex::new(3).unwrap();
//! assert_eq!(color.get(), 3);
//! assert!(ColorIndex::new(0).is_none());
//!
//! assert_eq!(COLUMNS, 10);
//! assert_eq!(ROWS, 20);
//! ```

use std::fmt;

/// Board width in cells (10 columns)
pub const COLUMNS: u8 = 10;

/// Board height in cells (20 rows)
pub const ROWS: u8 = 20;

/// Size of one board cell in the reference pixel viewport.
pub const CELL_PIXELS: u32 = 30;

/// Number of palette slots; color indices run `1..=COLOR_COUNT`.
pub const COLOR_COUNT: u8 = 7;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1.
pub const BASE_DROP_MS: u32 = 500;

/// Gravity speed-up per level above 1.
pub const DROP_STEP_MS: u32 = 30;

/// Fastest gravity interval.
pub const DROP_FLOOR_MS: u32 = 50;

/// Points awarded per cleared line (no multi-line bonus).
pub const LINE_SCORE: u32 = 100;

/// Cleared lines needed per level.
pub const LINES_PER_LEVEL: u32 = 5;

/// Largest shape side; every shape fits in a 4x4 grid.
pub const SHAPE_MAX: usize = 4;

/// 24-bit piece colors.
///
/// Color index `i` maps to slot `i - 1`.
pub const PALETTE: [(u8, u8, u8); COLOR_COUNT as usize] = [
    (0, 255, 255),   // cyan
    (255, 255, 0),   // yellow
    (128, 0, 128),   // purple
    (0, 255, 0),     // green
    (255, 0, 0),     // red
    (0, 0, 255),     // blue
    (255, 165, 0),   // orange
];


/// The seven tetromino piece kinds, in catalogue order.
///
/// A kind only names a shape. The color a piece is drawn with is chosen
/// separately at spawn time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Catalogue order used by the random shape draw.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Single uppercase letter, as shown in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Position in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A palette color index in `1..=COLOR_COUNT`.
///
/// The constructor rejects 0 and anything above [`COLOR_COUNT`], so a board
/// cell can never carry an invalid color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorIndex(u8);

impl ColorIndex {
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= COLOR_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Index into [`PALETTE`].
    pub const fn palette_slot(self) -> usize {
        (self.0 - 1) as usize
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        PALETTE[self.palette_slot()]
    }
}

impl fmt::Display for ColorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(ColorIndex)`: Cell filled with the given palette color
pub type Cell = Option<ColorIndex>;

/// Player intents that drive the engine.
///
/// Every variant maps to a single engine command; see
/// `GameState::apply_action` in the core crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Step piece one row down; locks it when blocked
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Clock-driven gravity step (same effect as `SoftDrop`)
    GravityTick,
}
