//! Terminal runner (default binary).
//!
//! Start screen, then a fixed-timestep loop: render, poll input until the
//! next tick, feed key presses and elapsed time to the [`App`]. When the game
//! ends the final frame stays up until a key is pressed, the terminal is
//! restored and the final score is printed.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use blockdrop::app::{App, Control};
use blockdrop::config::Config;
use blockdrop::core::{GameState, RandomSource};
use blockdrop::logging;
use blockdrop::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockdrop::types::TICK_MS;

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(&config)?;

    let game = match config.seed {
        Some(seed) => GameState::seeded(seed),
        None => GameState::new(),
    };
    info!(seed = ?config.seed, "starting blockdrop");

    let mut app = App::new(game);
    let view = GameView::new(config.cell_width, 1);

    let mut term = TerminalRenderer::enter()?;
    let result = run(&mut term, &mut app, &view);
    // Always try to restore terminal state before reporting anything.
    let restored = term.restore();
    result?;
    restored?;

    if app.is_finished() {
        println!("Game Over! Your score: {}", app.game().score());
    }
    Ok(())
}

fn run<R: RandomSource>(term: &mut TerminalRenderer, app: &mut App<R>, view: &GameView) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(view, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if app.is_finished() {
            return wait_for_key();
        }

        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key) == Control::Quit {
                        return Ok(());
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            app.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}

fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
