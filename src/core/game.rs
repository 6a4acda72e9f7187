//! Game module - the running/game-over state machine
//!
//! Owns the grid, the active piece, and the cleared-line counter, and
//! orchestrates spawn, gravity, manual movement, rotation, and line clears.
//! All transitions happen synchronously inside `tick`/`move_*`/`rotate`,
//! invoked serially by the scheduler and input layer; the engine itself
//! performs no I/O and keeps no timers.

use crate::core::{translate, Grid, Piece, SpawnRng};
use crate::types::{GameAction, Position, GRID_HEIGHT, GRID_WIDTH};

/// Engine lifecycle phase. `GameOver` is terminal: once entered, every
/// state-changing command is a no-op until `restart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// One-shot notifications for the frontend, consumed with
/// [`Game::take_last_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece locked into the grid; `lines_cleared` counts this lock only.
    Locked { lines_cleared: u32 },
    /// A fresh spawn collided with debris; `lines_cleared` is the final total.
    GameOver { lines_cleared: u32 },
}

/// Construction-time knobs. The gravity interval is not here: timing belongs
/// to the scheduler that calls [`Game::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            seed: 1,
        }
    }
}

/// Complete engine state. The grid and active piece are owned exclusively;
/// external layers read them through the accessors and never mutate.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    active: Piece,
    rng: SpawnRng,
    lines_cleared: u32,
    phase: Phase,
    needs_redraw: bool,
    last_event: Option<GameEvent>,
}

impl Game {
    /// Start a new game with a freshly spawned random piece.
    pub fn new(config: GameConfig) -> Self {
        let grid = Grid::new(config.width, config.height);
        let mut rng = SpawnRng::new(config.seed);
        let active = Piece::spawn(rng.next_kind(), config.width);
        Self {
            config,
            grid,
            active,
            rng,
            lines_cleared: 0,
            phase: Phase::Running,
            needs_redraw: true,
            last_event: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Consume the pending-redraw flag. The frontend draws when this is set.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Take and clear the most recent lock/game-over event.
    pub fn take_last_event(&mut self) -> Option<GameEvent> {
        self.last_event.take()
    }

    /// Replace this game with a fresh one on the same grid dimensions,
    /// continuing the RNG sequence so restarts do not replay the same pieces.
    pub fn restart(&mut self) {
        let config = GameConfig {
            seed: self.rng.state(),
            ..self.config
        };
        *self = Self::new(config);
    }

    /// One gravity step: descend if the space below is free, otherwise lock
    /// the piece where it is, clear full rows, and spawn the next piece.
    /// A spawn that collides with debris ends the game; its cells are not
    /// committed to the grid.
    pub fn tick(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }
        let next = translate::translate_down(self.active.cells());
        if self.grid.is_valid(&next) {
            self.active.apply_translation(next, 0, 1);
        } else {
            self.lock_active();
        }
        self.needs_redraw = true;
    }

    fn lock_active(&mut self) {
        self.grid.lock(self.active.cells(), self.active.color());
        let cleared = self.grid.clear_full_rows().len() as u32;
        self.lines_cleared += cleared;

        self.active = Piece::spawn(self.rng.next_kind(), self.config.width);
        if self.grid.is_valid(self.active.cells()) {
            self.last_event = Some(GameEvent::Locked {
                lines_cleared: cleared,
            });
        } else {
            self.phase = Phase::GameOver;
            self.last_event = Some(GameEvent::GameOver {
                lines_cleared: self.lines_cleared,
            });
        }
    }

    /// Shift the active piece one column left if the target cells are free.
    pub fn move_left(&mut self) {
        let next = translate::translate_left(self.active.cells());
        self.try_shift(next, -1, 0);
    }

    /// Shift the active piece one column right if the target cells are free.
    pub fn move_right(&mut self) {
        let next = translate::translate_right(self.active.cells());
        self.try_shift(next, 1, 0);
    }

    fn try_shift(&mut self, next: [Position; 4], dcol: i16, drow: i16) {
        if self.phase == Phase::GameOver {
            return;
        }
        if self.grid.is_valid(&next) {
            self.active.apply_translation(next, dcol, drow);
        }
        // A rejected shift is a no-op, but the command still notifies.
        self.needs_redraw = true;
    }

    /// Advance the active piece one orientation step if the rotated cells are
    /// free. Atomic: either both orientation and cells commit, or neither
    /// does. A rejected rotation flags no redraw.
    pub fn rotate(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }
        if !self.active.kind().supports_rotation() {
            return;
        }
        let candidate = self.active.rotated();
        if self.grid.is_valid(candidate.cells()) {
            self.active = candidate;
            self.needs_redraw = true;
        }
    }

    /// Route an input-layer action to the matching engine command.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            // Soft drop is a single gravity step, same as the timer.
            GameAction::SoftDrop => self.tick(),
            GameAction::Restart => self.restart(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
