//! Scroll state module - the stored-offset walker (demo 2)
//!
//! Unlike demo 1, the scroll offsets here are authoritative state: every
//! successful step updates them in place, and a blocked step restores the
//! pre-move snapshot so neither the player nor the offsets change.

use crate::core::camera;
use crate::core::snapshot::ScrollSnapshot;
use crate::core::{Player, Tilemap};
use crate::types::{Direction, WORLD_HEIGHT, WORLD_WIDTH};

/// Complete state of the stored-offset demo
#[derive(Debug, Clone)]
pub struct ScrollState {
    map: Tilemap,
    player: Player,
    shift_x: i16,
    shift_y: i16,
}

impl ScrollState {
    /// Create the demo on the bundled overworld at the spawn position
    pub fn new() -> Self {
        Self::with_map(Tilemap::new(), Player::default())
    }

    /// Create the demo on a custom map; offsets are seeded from the camera
    /// transform at the start position.
    pub fn with_map(map: Tilemap, player: Player) -> Self {
        let (shift_x, shift_y) = camera::viewport_shift(player.x, player.y);
        Self {
            map,
            player,
            shift_x,
            shift_y,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn map(&self) -> &Tilemap {
        &self.map
    }

    /// The stored offset the map is drawn at
    pub fn shift(&self) -> (i16, i16) {
        (self.shift_x, self.shift_y)
    }

    /// Where the player is drawn, per the stored offsets
    pub fn player_screen_position(&self) -> (i16, i16) {
        (self.player.x + self.shift_x, self.player.y + self.shift_y)
    }

    /// Capture the pre-move state
    pub fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            player_x: self.player.x,
            player_y: self.player.y,
            shift_x: self.shift_x,
            shift_y: self.shift_y,
        }
    }

    /// Restore a previously captured snapshot
    pub fn restore(&mut self, snapshot: ScrollSnapshot) {
        self.player.x = snapshot.player_x;
        self.player.y = snapshot.player_y;
        self.shift_x = snapshot.shift_x;
        self.shift_y = snapshot.shift_y;
    }

    /// Try to move the player one pixel in `dir`, scrolling the map with it.
    ///
    /// The move and the offset update are applied tentatively, then checked;
    /// a failed check restores the pre-move snapshot wholesale. Returns
    /// whether the player moved.
    pub fn step(&mut self, dir: Direction) -> bool {
        let snapshot = self.snapshot();

        let (dx, dy) = dir.delta();
        self.player.x += dx;
        self.player.y += dy;
        let (sx, sy) = camera::viewport_shift(self.player.x, self.player.y);
        self.shift_x = sx;
        self.shift_y = sy;

        let ok = Self::within_world(self.player.x, self.player.y)
            && Player::move_allowed(&self.map, self.player.x, self.player.y, dir);

        if !ok {
            self.restore(snapshot);
        }
        ok
    }

    fn within_world(x: i16, y: i16) -> bool {
        x >= 0 && y >= 0 && x <= WORLD_WIDTH && y <= WORLD_HEIGHT
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
