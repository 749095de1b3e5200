//! Tilemap module - manages the world grid
//!
//! The world is a 16x16 grid of 16x16-pixel tiles stored in a flat array.
//! Coordinates: (col, row) with col 0..15 left to right, row 0..15 top to
//! bottom; pixel lookups floor-divide by the tile size per axis.
//! Out-of-world lookups return `None` so callers never index past the map.

use crate::types::{TileKind, MAP_TILE_HEIGHT, MAP_TILE_WIDTH, TILE_HEIGHT, TILE_WIDTH};

/// Total number of tiles on the map
const MAP_TILE_COUNT: usize = (MAP_TILE_WIDTH * MAP_TILE_HEIGHT) as usize;

/// The bundled overworld: a water ring around a green field with scattered
/// trees and grass tufts (ids: 0 water, 1 green, 2 tree, 3 grass).
#[rustfmt::skip]
pub const OVERWORLD_TILE_IDS: [u8; MAP_TILE_COUNT] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 3, 3, 1, 1, 1, 1, 2, 1, 1, 1, 1, 0,
    0, 1, 2, 1, 1, 3, 1, 1, 1, 1, 1, 1, 1, 2, 1, 0,
    0, 1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 0,
    0, 1, 1, 1, 1, 1, 1, 1, 2, 1, 3, 3, 1, 1, 1, 0,
    0, 3, 1, 1, 1, 1, 2, 1, 1, 1, 3, 1, 1, 2, 1, 0,
    0, 3, 3, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 0,
    0, 1, 1, 1, 1, 3, 1, 1, 1, 1, 1, 2, 1, 1, 1, 0,
    0, 1, 2, 1, 1, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0,
    0, 1, 1, 1, 1, 1, 1, 1, 3, 1, 1, 1, 2, 1, 1, 0,
    0, 1, 1, 2, 1, 1, 1, 3, 3, 1, 1, 1, 1, 1, 1, 0,
    0, 1, 1, 1, 1, 2, 1, 1, 1, 1, 2, 1, 1, 3, 1, 0,
    0, 1, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 3, 1, 0,
    0, 1, 1, 1, 1, 1, 2, 1, 1, 2, 1, 1, 1, 1, 1, 0,
    0, 1, 1, 3, 1, 1, 1, 1, 1, 1, 1, 1, 2, 1, 1, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// The world map - 16x16 tiles using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tilemap {
    /// Flat array of tiles, row-major order (row * WIDTH + col)
    tiles: [TileKind; MAP_TILE_COUNT],
}

impl Tilemap {
    /// Create the bundled overworld map
    pub fn new() -> Self {
        Self::from_tile_ids(&OVERWORLD_TILE_IDS)
    }

    /// Build a map from raw tile ids; unknown ids fall back to water
    pub fn from_tile_ids(ids: &[u8; MAP_TILE_COUNT]) -> Self {
        let mut tiles = [TileKind::Water; MAP_TILE_COUNT];
        for (tile, id) in tiles.iter_mut().zip(ids.iter()) {
            *tile = TileKind::from_id(*id).unwrap_or(TileKind::Water);
        }
        Self { tiles }
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(col: i16, row: i16) -> Option<usize> {
        if col < 0 || col >= MAP_TILE_WIDTH || row < 0 || row >= MAP_TILE_HEIGHT {
            return None;
        }
        Some((row as usize) * (MAP_TILE_WIDTH as usize) + (col as usize))
    }

    /// Get width of the map in tiles
    pub fn width(&self) -> i16 {
        MAP_TILE_WIDTH
    }

    /// Get height of the map in tiles
    pub fn height(&self) -> i16 {
        MAP_TILE_HEIGHT
    }

    /// Get tile at (col, row)
    /// Returns None if out of bounds
    pub fn tile(&self, col: i16, row: i16) -> Option<TileKind> {
        Self::index(col, row).map(|idx| self.tiles[idx])
    }

    /// Get the tile under a world pixel
    ///
    /// Floor division by the tile size, independently per axis. Negative or
    /// out-of-world pixels return `None`.
    pub fn tile_at_pixel(&self, x: i16, y: i16) -> Option<TileKind> {
        if x < 0 || y < 0 {
            return None;
        }
        self.tile(x / TILE_WIDTH, y / TILE_HEIGHT)
    }

    /// Check whether a world pixel lies on a walkable tile
    ///
    /// Anything outside the world is not walkable.
    pub fn is_walkable_at(&self, x: i16, y: i16) -> bool {
        self.tile_at_pixel(x, y)
            .map(|kind| kind.is_walkable())
            .unwrap_or(false)
    }

    /// Set tile at (col, row) (for testing)
    /// Returns false if out of bounds
    #[cfg(test)]
    pub fn set(&mut self, col: i16, row: i16, kind: TileKind) -> bool {
        match Self::index(col, row) {
            Some(idx) => {
                self.tiles[idx] = kind;
                true
            }
            None => false,
        }
    }
}

impl Default for Tilemap {
    fn default() -> Self {
        Self::new()
    }
}
