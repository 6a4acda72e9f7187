//! Core module - pure game logic with no external I/O
//!
//! Everything in here is deterministic and synchronous: the grid, the piece
//! geometry, the translation helpers, and the game state machine. Rendering,
//! input, and timing live outside and only call in.

pub mod game;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod translate;

// Re-export commonly used types
pub use game::{Game, GameConfig, GameEvent, Phase};
pub use grid::Grid;
pub use piece::Piece;
pub use rng::SpawnRng;
