//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds a palette color index.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom), col ranges 0..9
//! (left to right). Rows above the board (negative) are never stored.

use crate::error::CoreError;
use crate::pieces::Shape;
use crate::types::{Cell, ColorIndex, COLUMNS, ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (COLUMNS as usize) * (ROWS as usize);

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLUMNS + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= ROWS as i8 || col < 0 || col >= COLUMNS as i8 {
            return None;
        }
        Some((row as usize) * (COLUMNS as usize) + (col as usize))
    }

    pub fn rows(&self) -> u8 {
        ROWS
    }

    pub fn columns(&self) -> u8 {
        COLUMNS
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Bounds-checked cell lookup for external callers.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, CoreError> {
        if row >= ROWS as usize || col >= COLUMNS as usize {
            return Err(CoreError::OutOfBounds { row, col });
        }
        Ok(self.cells[row * COLUMNS as usize + col])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Collision predicate shared by every move, rotation and spawn check.
    ///
    /// Each occupied cell of `shape` anchored at `(row, col)` must sit in a
    /// column inside the board and a row above the floor. Cells on the board
    /// must also be empty; cells above the top edge always fit. An anchor so
    /// far out that a cell coordinate leaves `i8` never fits.
    pub fn fits(&self, shape: &Shape, row: i8, col: i8) -> bool {
        shape.offsets().iter().all(|&(dr, dc)| {
            let (Some(r), Some(c)) = (row.checked_add(dr), col.checked_add(dc)) else {
                return false;
            };
            if c < 0 || c >= COLUMNS as i8 || r >= ROWS as i8 {
                return false;
            }
            r < 0 || !self.is_occupied(r, c)
        })
    }

    /// Write `shape` into the board with `color`.
    ///
    /// Cells above the top edge are dropped. Returns the number of cells written.
    pub fn lock_shape(&mut self, shape: &Shape, row: i8, col: i8, color: ColorIndex) -> usize {
        let mut written = 0;
        for (dr, dc) in shape.offsets() {
            let (Some(r), Some(c)) = (row.checked_add(dr), col.checked_add(dc)) else {
                continue;
            };
            if self.set(r, c, Some(color)) {
                written += 1;
            }
        }
        written
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= ROWS as usize {
            return false;
        }
        let start = row * COLUMNS as usize;
        let end = start + COLUMNS as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row and refill from the top.
    ///
    /// Surviving rows keep their relative order. Uses a two-pointer pass with
    /// zero allocation. Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> u32 {
        let width = COLUMNS as usize;
        let mut write_row = ROWS as usize;
        let mut cleared = 0;

        // Scan from bottom to top
        for read_row in (0..ROWS as usize).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src_start = read_row * width;
                    let dst_start = write_row * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_row * width].fill(None);

        cleared
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a `u8` grid (0 = empty, otherwise the color index).
    pub fn write_u8_grid(&self, out: &mut [[u8; COLUMNS as usize]; ROWS as usize]) {
        for (row, chunk) in out.iter_mut().zip(self.cells.chunks_exact(COLUMNS as usize)) {
            for (dst, cell) in row.iter_mut().zip(chunk) {
                *dst = cell.map(ColorIndex::get).unwrap_or(0);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
