//! Terminal tilemap walker demos.
//!
//! A player sprite walks over a 16x16 grid of 16x16-pixel tiles with
//! collision against non-walkable tiles, while the visible window follows
//! the player. Two binaries share this crate:
//!
//! - `tui-tilewalk`: the viewport is derived from the player position
//!   every frame ([`core::camera`]).
//! - `scroll-walk`: the scroll offsets are stored state, updated on every
//!   move and restored from a snapshot when a move is blocked
//!   ([`core::ScrollState`]).

pub mod core;
pub mod input;
pub mod term;
pub mod types;
