//! blockfall: a deterministic falling-block puzzle engine.
//!
//! The [`core`] module holds the whole game — grid, pieces, rotation tables,
//! and the running/game-over state machine — with no I/O, no timers, and no
//! terminal. The [`term`] and [`input`] modules plus the binary are thin
//! collaborators: they render the engine's state, map keys to commands, and
//! own the gravity interval.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
