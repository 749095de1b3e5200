//! Core module - pure demo logic with no external dependencies
//!
//! This module contains the world grid, the coordinate transforms and the
//! two demo states. It has zero dependencies on UI or I/O.

pub mod camera;
pub mod game_state;
pub mod player;
pub mod scroll_state;
pub mod snapshot;
pub mod tilemap;

// Re-export commonly used types
pub use game_state::GameState;
pub use player::Player;
pub use scroll_state::ScrollState;
pub use snapshot::ScrollSnapshot;
pub use tilemap::Tilemap;
