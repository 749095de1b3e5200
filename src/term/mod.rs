//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the view draws into a plain
//! framebuffer (pure, testable) and the renderer flushes framebuffers to
//! the terminal with run-diffing against the previous frame.

pub mod fb;
pub mod map_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use map_view::{MapView, Viewport};
pub use renderer::TerminalRenderer;
