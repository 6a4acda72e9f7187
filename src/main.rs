//! Terminal blockfall runner (default binary).
//!
//! Owns the gravity interval and the event loop: poll input with a timeout
//! until the next gravity deadline, apply actions, tick, redraw when the
//! engine flags a visible change. Gravity stops once the game is over; `r`
//! starts a fresh game.

use std::time::{Duration, Instant};

use anyhow::{ensure, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Game, GameConfig, Phase};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{GRAVITY_MS, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Parser)]
#[command(version, about = "Falling-block puzzle in the terminal")]
struct Args {
    /// Grid width in columns
    #[arg(long, default_value_t = GRID_WIDTH)]
    width: u16,

    /// Grid height in rows
    #[arg(long, default_value_t = GRID_HEIGHT)]
    height: u16,

    /// Milliseconds between gravity steps
    #[arg(long, default_value_t = GRAVITY_MS)]
    gravity_ms: u64,

    /// Seed for the piece spawn sequence
    #[arg(long, default_value_t = 1)]
    seed: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    // Every kind spawns within a 3-wide, 4-tall area around the top center.
    ensure!(
        args.width >= 4 && args.height >= 4,
        "grid must be at least 4x4"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, args: &Args) -> Result<()> {
    let mut game = Game::new(GameConfig {
        width: args.width,
        height: args.height,
        seed: args.seed,
    });
    let view = GameView::default();
    let gravity = Duration::from_millis(args.gravity_ms);
    let mut last_tick = Instant::now();

    loop {
        if game.take_redraw() {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let fb = view.render(&game, Viewport::new(w, h));
            term.draw(&fb)?;
        }

        let timeout = gravity
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
            }
        }

        if last_tick.elapsed() >= gravity {
            last_tick = Instant::now();
            // Game over stops gravity; only a restart resumes it.
            if game.phase() == Phase::Running {
                game.tick();
            }
        }
    }
}
