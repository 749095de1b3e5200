//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Tile dimensions in pixels
pub const TILE_WIDTH: i16 = 16;
pub const TILE_HEIGHT: i16 = 16;

/// Map dimensions in tiles
pub const MAP_TILE_WIDTH: i16 = 16;
pub const MAP_TILE_HEIGHT: i16 = 16;

/// World dimensions in pixels
pub const WORLD_WIDTH: i16 = MAP_TILE_WIDTH * TILE_WIDTH;
pub const WORLD_HEIGHT: i16 = MAP_TILE_HEIGHT * TILE_HEIGHT;

/// Emulated LCD dimensions in pixels (the handheld this demo imitates)
pub const SCREEN_WIDTH: i16 = 220;
pub const SCREEN_HEIGHT: i16 = 176;

/// Player sprite dimensions in pixels (smaller than one tile)
pub const PLAYER_WIDTH: i16 = 12;
pub const PLAYER_HEIGHT: i16 = 15;

/// Player spawn position in world pixels (a vacant spot on the map)
pub const PLAYER_START_X: i16 = 48;
pub const PLAYER_START_Y: i16 = 48;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;

/// Tile kinds, in map-data id order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Water,
    Green,
    Tree,
    Grass,
}

impl TileKind {
    /// Parse a tile kind from its map-data id
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(TileKind::Water),
            1 => Some(TileKind::Green),
            2 => Some(TileKind::Tree),
            3 => Some(TileKind::Grass),
            _ => None,
        }
    }

    /// Map-data id for this tile kind
    pub fn id(&self) -> u8 {
        match self {
            TileKind::Water => 0,
            TileKind::Green => 1,
            TileKind::Tree => 2,
            TileKind::Grass => 3,
        }
    }

    /// Only open green tiles can be walked on; water, trees and grass
    /// tufts all block movement.
    pub fn is_walkable(&self) -> bool {
        matches!(self, TileKind::Green)
    }
}

/// Movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Single-step displacement in world pixels
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Stable index into per-direction state tables
    pub fn index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}
