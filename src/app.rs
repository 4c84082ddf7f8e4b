//! Front-end state machine between the terminal and the engine.
//!
//! `App` owns the engine, the gravity clock and the current [`Phase`]. The
//! binary feeds it key presses and elapsed time; each call applies at most one
//! engine command, and rendering always reads a snapshot taken afterwards.
//!
//! Phases:
//! - `Start`: only the start key (or quit) is accepted; gravity does not run
//! - `Playing`: movement keys and gravity drive the engine
//! - `Paused`: only the pause key (or quit) is accepted; gravity does not run

use crossterm::event::KeyEvent;
use tracing::{debug, info};

use crate::core::{GameSnapshot, GameState, GravityClock, RandomSource, StdRandom};
use crate::input::{handle_key_event, is_pause_key, is_start_key, should_quit};
use crate::term::{FrameBuffer, GameView, Phase, Viewport};

/// What the runner should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App<R = StdRandom> {
    game: GameState<R>,
    clock: GravityClock,
    phase: Phase,
    snapshot: GameSnapshot,
}

impl<R: RandomSource> App<R> {
    pub fn new(game: GameState<R>) -> Self {
        let snapshot = game.snapshot();
        Self {
            game,
            clock: GravityClock::new(),
            phase: Phase::Start,
            snapshot,
        }
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Snapshot taken after the last completed command.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn is_finished(&self) -> bool {
        self.game.is_game_over()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if should_quit(key) {
            info!(score = self.game.score(), "quit requested");
            return Control::Quit;
        }
        if self.game.is_game_over() {
            return Control::Continue;
        }

        match self.phase {
            Phase::Start => {
                if is_start_key(key) {
                    self.phase = Phase::Playing;
                    self.clock.reset();
                    info!("game started");
                }
            }
            Phase::Paused => {
                if is_pause_key(key) {
                    self.phase = Phase::Playing;
                    debug!("resumed");
                }
            }
            Phase::Playing => {
                if is_pause_key(key) {
                    self.phase = Phase::Paused;
                    debug!("paused");
                } else if let Some(action) = handle_key_event(key) {
                    self.game.apply_action(action);
                    self.refresh();
                }
            }
        }
        Control::Continue
    }

    /// Advance the gravity clock; applies one gravity step when due.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.phase != Phase::Playing || self.game.is_game_over() {
            return;
        }
        if self.clock.advance(elapsed_ms, self.game.level()) {
            self.game.gravity_tick();
            self.refresh();
        }
    }

    pub fn render_into(&self, view: &GameView, viewport: Viewport, fb: &mut FrameBuffer) {
        view.render_into(&self.snapshot, self.phase, viewport, fb);
    }

    fn refresh(&mut self) {
        self.game.snapshot_into(&mut self.snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRandom;
    use crossterm::event::KeyCode;

    fn app() -> App<ScriptedRandom> {
        // T pieces, color 1.
        App::new(GameState::with_rng(ScriptedRandom::new(vec![2, 0])))
    }

    fn press(app: &mut App<ScriptedRandom>, code: KeyCode) -> Control {
        app.handle_key(KeyEvent::from(code))
    }

    #[test]
    fn start_gate_blocks_input_and_gravity() {
        let mut app = app();
        let x = app.game().active().x;

        press(&mut app, KeyCode::Left);
        app.tick(10_000);
        assert_eq!(app.phase(), Phase::Start);
        assert_eq!(app.game().active().x, x);
        assert_eq!(app.game().active().y, 0);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.phase(), Phase::Playing);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.game().active().x, x - 1);
        assert_eq!(app.snapshot().active.map(|p| p.x), Some(x - 1));
    }

    #[test]
    fn gravity_runs_at_level_interval() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);

        app.tick(500);
        assert_eq!(app.game().active().y, 0);
        app.tick(16);
        assert_eq!(app.game().active().y, 1);
    }

    #[test]
    fn pause_stops_gravity_and_input() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.phase(), Phase::Paused);

        app.tick(10_000);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.game().active().y, 0);

        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.game().active().y, 1);
    }

    #[test]
    fn quit_is_always_available() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), Control::Quit);
        press(&mut app, KeyCode::Enter);
        assert_eq!(press(&mut app, KeyCode::Esc), Control::Quit);
    }
}
