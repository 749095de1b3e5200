//! Terminal input module
//!
//! Maps `crossterm` key events into movement [`Direction`]s and tracks
//! which directions are held, so the demos can apply exactly one
//! single-pixel step per held direction per update tick.
//!
//! [`Direction`]: crate::types::Direction

pub mod handler;
pub mod map;

pub use handler::InputHandler;
pub use map::{direction_for_key, direction_for_key_code, should_quit};
