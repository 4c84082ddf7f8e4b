//! Game state module - manages the complete game state
//!
//! This module ties together the board, pieces, random source and scoring.
//! It handles spawning, movement, rotation, locking, line clears and the
//! game-over condition. Timing lives outside: a clock calls
//! [`GameState::gravity_tick`] at [`GameState::drop_interval_ms`] cadence.
//!
//! Every command is total. A move or rotation that does not fit is silently
//! rejected; the only terminal outcome is the sticky game-over flag, after
//! which all commands are ignored.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::board::Board;
use crate::error::CoreError;
use crate::pieces::{Piece, Shape};
use crate::rng::{RandomSource, StdRandom};
use crate::scoring::{drop_interval_ms, level_for_lines, line_clear_score};
use crate::snapshot::GameSnapshot;
use crate::types::{Cell, ColorIndex, GameAction, PieceKind, COLOR_COUNT};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = StdRandom> {
    board: Board,
    active: Piece,
    next: Piece,
    rng: R,
    score: u32,
    level: u32,
    lines: u32,
    game_over: bool,
}

impl GameState<StdRandom> {
    /// New game seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRandom::from_entropy())
    }

    /// New game with a reproducible piece sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRandom::seeded(seed))
    }
}

impl Default for GameState<StdRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> GameState<R> {
    /// New game on an empty board, drawing pieces from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self::with_board(Board::new(), rng)
    }

    /// New game on a prepared board.
    ///
    /// The active piece is drawn first, then the on-deck piece.
    pub fn with_board(board: Board, mut rng: R) -> Self {
        let active = draw_piece(&mut rng);
        let next = draw_piece(&mut rng);
        debug!(active = %active.kind, next = %next.kind, "new game");

        Self {
            board,
            active,
            next,
            rng,
            score: 0,
            level: 1,
            lines: 0,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Bounds-checked board lookup.
    pub fn board_cell(&self, row: usize, col: usize) -> Result<Cell, CoreError> {
        self.board.cell(row, col)
    }

    /// `(row, col, color)` of every active-piece cell, including cells above the board.
    pub fn active_cells(&self) -> ArrayVec<(i8, i8, ColorIndex), 16> {
        let color = self.active.color;
        self.active
            .cells()
            .into_iter()
            .map(|(r, c)| (r, c, color))
            .collect()
    }

    /// Gravity interval for the current level.
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Draw a fresh piece: uniform shape, then an independent uniform color.
    ///
    /// The piece is not checked against the board.
    pub fn spawn_piece(&mut self) -> Piece {
        draw_piece(&mut self.rng)
    }

    /// Whether the active piece (or `shape` in its place) fits at offset `(dx, dy)`.
    ///
    /// Pure: reads the board and the active piece only. An offset that would
    /// push the anchor out of `i8` range does not fit.
    pub fn can_place(&self, dx: i8, dy: i8, shape: Option<&Shape>) -> bool {
        let shape = shape.unwrap_or(&self.active.shape);
        match (self.active.y.checked_add(dy), self.active.x.checked_add(dx)) {
            (Some(row), Some(col)) => self.board.fits(shape, row, col),
            _ => false,
        }
    }

    /// Rotate the active piece 90° clockwise in place; no wall kicks.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let rotated = self.active.shape.rotated_cw();
        if !self.can_place(0, 0, Some(&rotated)) {
            return false;
        }
        self.active.shape = rotated;
        true
    }

    /// Translate the active piece by `(dx, dy)`.
    ///
    /// A blocked downward move locks the piece; other blocked moves do nothing.
    /// Returns true only when the piece actually moved.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over {
            return false;
        }

        if self.can_place(dx, dy, None) {
            // can_place has already range-checked both sums.
            self.active.x = self.active.x.wrapping_add(dx);
            self.active.y = self.active.y.wrapping_add(dy);
            return true;
        }

        if dy > 0 {
            self.lock_piece();
        }
        false
    }

    /// Lock the active piece onto the board and bring in the next one.
    ///
    /// Order: write cells, clear lines, promote on-deck piece, draw a new
    /// on-deck piece, then end the game if the promoted piece does not fit.
    pub fn lock_piece(&mut self) {
        if self.game_over {
            return;
        }

        let piece = self.active;
        let written = self
            .board
            .lock_shape(&piece.shape, piece.y, piece.x, piece.color);
        debug!(
            kind = %piece.kind,
            row = piece.y,
            col = piece.x,
            color = %piece.color,
            written,
            "piece locked"
        );

        self.clear_lines();

        self.active = self.next;
        self.next = draw_piece(&mut self.rng);

        if !self.can_place(0, 0, None) {
            self.game_over = true;
            info!(
                score = self.score,
                level = self.level,
                lines = self.lines,
                "game over"
            );
        }
    }

    /// Remove full rows and apply their score. Returns the number of rows cleared.
    pub fn clear_lines(&mut self) -> u32 {
        let cleared = self.board.clear_full_rows();
        if cleared == 0 {
            return 0;
        }

        self.lines = self.lines.saturating_add(cleared);
        self.score = self.score.saturating_add(line_clear_score(cleared));
        let previous_level = self.level;
        self.update_level();

        info!(cleared, lines = self.lines, score = self.score, "lines cleared");
        if self.level != previous_level {
            info!(
                level = self.level,
                drop_ms = self.drop_interval_ms(),
                "level up"
            );
        }
        cleared
    }

    /// Recompute the level from the cumulative line count.
    pub fn update_level(&mut self) {
        self.level = level_for_lines(self.lines);
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Clock-driven gravity step.
    pub fn gravity_tick(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::GravityTick => self.gravity_tick(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = Some(self.active);
        out.next = Some(self.next);
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

fn draw_piece<R: RandomSource>(rng: &mut R) -> Piece {
    let kind = PieceKind::ALL[rng.next_below(PieceKind::ALL.len() as u32) as usize];
    let color = ColorIndex::new(rng.next_below(COLOR_COUNT as u32) as u8 + 1)
        .unwrap_or_else(|| unreachable!("draw below COLOR_COUNT is a valid index"));
    Piece::spawn(kind, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandom;

    /// Scripted source that spawns `kinds` in order, every piece with color 1.
    fn script(kinds: &[PieceKind]) -> ScriptedRandom {
        let values: Vec<u32> = kinds
            .iter()
            .flat_map(|k| [k.index() as u32, 0])
            .collect();
        ScriptedRandom::new(values)
    }

    fn color(v: u8) -> ColorIndex {
        ColorIndex::new(v).unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::with_rng(script(&[PieceKind::T, PieceKind::I]));

        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lines, 0);
        assert_eq!(state.active.kind, PieceKind::T);
        assert_eq!(state.next.kind, PieceKind::I);
        assert_eq!(state.board.filled_count(), 0);
    }

    #[test]
    fn test_spawn_draws_shape_then_color() {
        let mut state = GameState::with_rng(ScriptedRandom::new(vec![
            2, 4, // active: T, color 5
            0, 6, // next: I, color 7
            6, 0, // spawned: L, color 1
        ]));

        assert_eq!(state.active.kind, PieceKind::T);
        assert_eq!(state.active.color, color(5));
        assert_eq!(state.next.kind, PieceKind::I);
        assert_eq!(state.next.color, color(7));

        let piece = state.spawn_piece();
        assert_eq!(piece.kind, PieceKind::L);
        assert_eq!(piece.color, color(1));
        assert_eq!((piece.x, piece.y), (4, 0));
    }

    #[test]
    fn test_try_move() {
        let mut state = GameState::with_rng(script(&[PieceKind::T]));
        let x = state.active.x;

        assert!(state.try_move(1, 0));
        assert_eq!(state.active.x, x + 1);
        assert!(state.try_move(-1, 0));
        assert_eq!(state.active.x, x);
        assert!(state.try_move(0, 1));
        assert_eq!(state.active.y, 1);
    }

    #[test]
    fn test_upward_move_into_sky_is_allowed() {
        let mut state = GameState::with_rng(script(&[PieceKind::T]));
        assert!(state.try_move(0, -1));
        assert_eq!(state.active.y, -1);
    }

    #[test]
    fn test_huge_offsets_are_rejected_without_overflow() {
        let mut state = GameState::with_rng(script(&[PieceKind::T]));
        let before = state.active;

        assert!(!state.try_move(i8::MAX, 0));
        assert!(!state.try_move(i8::MIN, 0));
        assert!(!state.can_place(0, i8::MAX, None));
        assert!(!state.can_place(i8::MAX, i8::MIN, None));
        assert_eq!(state.active, before);
        assert_eq!(state.board.filled_count(), 0);
        assert!(!state.game_over);
    }

    #[test]
    fn test_repeated_upward_moves_stop_at_anchor_limit() {
        let mut state = GameState::with_rng(script(&[PieceKind::T]));
        for _ in 0..200 {
            state.try_move(0, -1);
        }
        assert_eq!(state.active.y, i8::MIN);
        assert!(!state.try_move(0, -1));

        // Still a live piece: it can come back down.
        assert!(state.try_move(0, 1));
        assert_eq!(state.active.y, i8::MIN + 1);
        assert!(!state.game_over);
    }

    #[test]
    fn test_blocked_horizontal_move_does_not_lock() {
        let mut state = GameState::with_rng(script(&[PieceKind::O]));
        while state.move_left() {}
        assert_eq!(state.active.x, 0);
        assert!(!state.move_left());
        assert_eq!(state.board.filled_count(), 0);
    }

    #[test]
    fn test_blocked_drop_locks() {
        let mut state = GameState::with_rng(script(&[PieceKind::O, PieceKind::I]));
        for _ in 0..18 {
            assert!(state.gravity_tick());
        }
        assert_eq!(state.active.y, 18);

        assert!(!state.gravity_tick());
        assert_eq!(state.board.filled_count(), 4);
        assert_eq!(state.board.get(19, 4), Some(Some(color(1))));
        assert_eq!(state.active.kind, PieceKind::I);
        assert_eq!(state.active.y, 0);
    }

    #[test]
    fn test_rotate_replaces_shape_only() {
        let mut state = GameState::with_rng(script(&[PieceKind::T]));
        let before = state.active;

        assert!(state.rotate());
        assert_eq!(state.active.shape, before.shape.rotated_cw());
        assert_eq!((state.active.x, state.active.y), (before.x, before.y));
        assert_eq!(state.active.color, before.color);
    }

    #[test]
    fn test_rotate_rejected_at_wall() {
        let mut state = GameState::with_rng(script(&[PieceKind::I]));
        // Vertical I against the right wall: rotating back to horizontal overflows.
        assert!(state.rotate());
        while state.move_right() {}
        assert_eq!(state.active.x, 9);

        let shape = state.active.shape;
        assert!(!state.rotate());
        assert_eq!(state.active.shape, shape);
    }

    #[test]
    fn test_lock_promotes_next_and_draws_new() {
        let mut state =
            GameState::with_rng(script(&[PieceKind::S, PieceKind::Z, PieceKind::J]));
        state.lock_piece();
        assert_eq!(state.active.kind, PieceKind::Z);
        assert_eq!(state.next.kind, PieceKind::J);
        assert!(!state.game_over);
    }

    #[test]
    fn test_lock_clears_line_and_scores() {
        let mut board = Board::new();
        for c in 0..10 {
            if c != 3 {
                board.set(19, c, Some(color(2)));
            }
        }
        let mut state = GameState::with_board(board, script(&[PieceKind::I, PieceKind::O]));
        assert!(state.rotate());
        while state.soft_drop() {}

        assert_eq!(state.lines, 1);
        assert_eq!(state.score, 100);
        assert_eq!(state.level, 1);
        // Three cells of the vertical I remain, shifted down by one row.
        assert_eq!(state.board.filled_count(), 3);
        for r in 17..20 {
            assert_eq!(state.board.get(r, 3), Some(Some(color(1))));
        }
    }

    #[test]
    fn test_clear_lines_updates_level() {
        let mut state = GameState::with_rng(script(&[PieceKind::O]));
        state.lines = 4;
        for c in 0..10 {
            state.board.set(19, c, Some(color(3)));
        }
        assert_eq!(state.drop_interval_ms(), 500);

        assert_eq!(state.clear_lines(), 1);
        assert_eq!(state.lines, 5);
        assert_eq!(state.level, 2);
        assert_eq!(state.drop_interval_ms(), 470);
    }

    #[test]
    fn test_game_over_when_next_overlaps_spawn() {
        let mut state = GameState::with_rng(script(&[PieceKind::O]));
        // O spawns at (0, 4); locking it in place blocks the next O.
        state.lock_piece();
        assert!(state.game_over);
    }

    #[test]
    fn test_commands_ignored_after_game_over() {
        let mut state = GameState::with_rng(script(&[PieceKind::O]));
        state.lock_piece();
        assert!(state.game_over);

        let board = state.board.clone();
        let active = state.active;
        assert!(!state.move_left());
        assert!(!state.rotate());
        assert!(!state.gravity_tick());
        state.lock_piece();
        assert_eq!(state.board, board);
        assert_eq!(state.active, active);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::with_rng(script(&[PieceKind::L, PieceKind::T]));
        state.board.set(19, 0, Some(color(6)));
        let snap = state.snapshot();

        assert_eq!(snap.board[19][0], 6);
        assert_eq!(snap.active.map(|p| p.kind), Some(PieceKind::L));
        assert_eq!(snap.next.map(|p| p.kind), Some(PieceKind::T));
        assert_eq!(snap.level, 1);
        assert!(!snap.game_over);
    }
}
