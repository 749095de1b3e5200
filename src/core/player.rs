//! Player module - sprite geometry and tile collision sampling
//!
//! The sprite is 12x15 pixels, smaller than one 16x16 tile, so a single-step
//! move can land its leading edge across two tiles. A move is checked by
//! sampling the two forward corners of the bounding box at the destination.

use crate::core::Tilemap;
use crate::types::{Direction, PLAYER_HEIGHT, PLAYER_WIDTH, PLAYER_START_X, PLAYER_START_Y};

/// The walking player sprite, positioned in world pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub x: i16,
    pub y: i16,
}

impl Player {
    pub const WIDTH: i16 = PLAYER_WIDTH;
    pub const HEIGHT: i16 = PLAYER_HEIGHT;

    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The two leading corners of the bounding box for a move in `dir`,
    /// evaluated at a proposed position (x, y).
    pub fn forward_corners(x: i16, y: i16, dir: Direction) -> [(i16, i16); 2] {
        match dir {
            Direction::Left => [(x, y), (x, y + Self::HEIGHT)],
            Direction::Right => [(x + Self::WIDTH, y), (x + Self::WIDTH, y + Self::HEIGHT)],
            Direction::Up => [(x, y), (x + Self::WIDTH, y)],
            Direction::Down => [(x, y + Self::HEIGHT), (x + Self::WIDTH, y + Self::HEIGHT)],
        }
    }

    /// Check whether a move in `dir` to (x, y) lands on walkable tiles.
    ///
    /// Both sampled corners must be walkable; a corner outside the world
    /// counts as blocked.
    pub fn move_allowed(map: &Tilemap, x: i16, y: i16, dir: Direction) -> bool {
        Self::forward_corners(x, y, dir)
            .iter()
            .all(|&(cx, cy)| map.is_walkable_at(cx, cy))
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_START_X, PLAYER_START_Y)
    }
}
