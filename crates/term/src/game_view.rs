//! GameView: maps a core `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ColorIndex, COLUMNS, ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Front-end phase, owned by the runner. Decides which overlay is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the start key; the clock is not running.
    Start,
    Playing,
    Paused,
}

/// Largest cell size, in terminal columns or rows, a view will use.
pub const MAX_CELL_SIZE: u16 = 4;

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const BLOCK: char = '█';

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    /// Cell sizes are clamped to `1..=MAX_CELL_SIZE`.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_SIZE),
            cell_h: cell_h.clamp(1, MAX_CELL_SIZE),
        }
    }

    /// Outer size of the bordered well.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            COLUMNS as u16 * self.cell_w + 2,
            ROWS as u16 * self.cell_h + 2,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully repainted.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        phase: Phase,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle::plain(Rgb::new(80, 80, 90), WELL_BG);
        let border = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            bg,
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        if phase == Phase::Start {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PRESS SPACE TO START");
            return;
        }

        // Locked cells.
        for (row, cells) in snap.board.iter().enumerate() {
            for (col, &v) in cells.iter().enumerate() {
                match ColorIndex::new(v) {
                    Some(color) => self.draw_block(fb, start_x, start_y, row as i8, col as i8, color),
                    None => self.draw_empty_cell(fb, start_x, start_y, row as u16, col as u16),
                }
            }
        }

        // Active piece; cells above the top edge are not drawn.
        if let Some(active) = snap.active {
            for (row, col) in active.cells() {
                self.draw_block(fb, start_x, start_y, row, col, active.color);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if phase == Phase::Paused {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, phase: Phase, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, phase, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: u16, col: u16) {
        let style = CellStyle {
            dim: true,
            ..CellStyle::plain(Rgb::new(90, 90, 100), WELL_BG)
        };
        self.fill_cell_rect(fb, start_x, start_y, row, col, '·', style);
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: i8,
        col: i8,
        color: ColorIndex,
    ) {
        if row < 0 || row >= ROWS as i8 || col < 0 || col >= COLUMNS as i8 {
            return;
        }
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::from(color.rgb()), WELL_BG)
        };
        self.fill_cell_rect(fb, start_x, start_y, row as u16, col as u16, BLOCK, style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        for (name, v) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        if let Some(next) = snap.next {
            self.draw_preview(fb, panel_x, y.saturating_add(1), &next);
        }
    }

    /// Draw a piece's shape at its own origin, outside the well.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece) {
        let style = CellStyle::plain(Rgb::from(piece.color.rgb()), Rgb::new(0, 0, 0));
        for (dr, dc) in piece.shape.offsets() {
            let px = x.saturating_add(dc as u16 * self.cell_w);
            let py = y.saturating_add(dr as u16 * self.cell_h);
            fb.fill_rect(px, py, self.cell_w, self.cell_h, BLOCK, style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
        };
        fb.put_str(x, mid_y, text, style);
    }
}
