//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: a framebuffer of styled character
//! cells, a pure view that maps engine state into it, and a renderer that
//! flushes frames to the terminal. The view has no I/O and is unit-testable;
//! only `TerminalRenderer` touches the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
