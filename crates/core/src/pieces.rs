//! Pieces module - tetromino shape catalogue and rotation
//!
//! Shapes are stored as a fixed 4x4 occupancy grid with an explicit width and
//! height. Rotation recomputes the whole grid every call (reverse the rows, then
//! transpose), so there is no rotation state to track and asymmetric pieces
//! rotate about their bounding box exactly like the catalogue matrices do.

use arrayvec::ArrayVec;

use crate::types::{ColorIndex, PieceKind, COLUMNS, SHAPE_MAX};

/// Occupancy grid of a piece, row-major, anchored at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: [[bool; SHAPE_MAX]; SHAPE_MAX],
    width: u8,
    height: u8,
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Panics if the rows are ragged or larger than 4x4; only used for the
    /// static catalogue and tests.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= SHAPE_MAX);
        let width = rows[0].len();
        assert!(width > 0 && width <= SHAPE_MAX);

        let mut cells = [[false; SHAPE_MAX]; SHAPE_MAX];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "ragged shape row {}", r);
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }

        Self {
            cells,
            width: width as u8,
            height: rows.len() as u8,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Occupied `(row, col)` offsets, top to bottom, left to right.
    pub fn offsets(&self) -> ArrayVec<(i8, i8), 16> {
        let mut out = ArrayVec::new();
        for r in 0..self.height as usize {
            for c in 0..self.width as usize {
                if self.cells[r][c] {
                    out.push((r as i8, c as i8));
                }
            }
        }
        out
    }

    pub fn filled_count(&self) -> usize {
        self.offsets().len()
    }

    /// 90° clockwise rotation: `rotated[r][c] = self[h - 1 - c][r]`.
    pub fn rotated_cw(&self) -> Self {
        let h = self.height as usize;
        let w = self.width as usize;
        let mut cells = [[false; SHAPE_MAX]; SHAPE_MAX];
        for (r, row) in cells.iter_mut().enumerate().take(w) {
            for (c, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - c][r];
            }
        }
        Self {
            cells,
            width: self.height,
            height: self.width,
        }
    }
}

/// Catalogue shape for a piece kind, in spawn orientation.
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
    }
}

/// Horizontal spawn column: board center minus half the shape width.
pub fn spawn_x(shape: &Shape) -> i8 {
    (COLUMNS / 2) as i8 - (shape.width() / 2) as i8
}

/// An in-flight piece: shape, top-left anchor and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: ColorIndex,
    /// Anchor column.
    pub x: i8,
    /// Anchor row; negative while partially above the board.
    pub y: i8,
}

impl Piece {
    /// Create a piece of `kind` at its spawn anchor.
    pub fn spawn(kind: PieceKind, color: ColorIndex) -> Self {
        let shape = get_shape(kind);
        Self {
            kind,
            shape,
            color,
            x: spawn_x(&shape),
            y: 0,
        }
    }

    /// Board `(row, col)` of every occupied cell at the current anchor.
    pub fn cells(&self) -> ArrayVec<(i8, i8), 16> {
        self.shape
            .offsets()
            .into_iter()
            .map(|(r, c)| (self.y + r, self.x + c))
            .collect()
    }
}
