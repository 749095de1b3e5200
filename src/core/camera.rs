//! Camera module - viewport placement and player screen placement
//!
//! The visible window follows the player: the player sits at the screen
//! centre except near world edges, where the viewport pins to the edge and
//! the player walks towards it instead. Both transforms are per-axis and
//! pure; together they satisfy `screen + origin == world` at every position.

use crate::types::{SCREEN_HEIGHT, SCREEN_WIDTH, WORLD_HEIGHT, WORLD_WIDTH};

/// Viewport shift for one axis: the offset the map is drawn at (<= 0 when
/// the world is larger than the screen).
fn shift_axis(entity: i16, world: i16, screen: i16) -> i16 {
    if entity < screen / 2 {
        0
    } else if entity > world - screen / 2 {
        screen - world
    } else {
        screen / 2 - entity
    }
}

/// Player screen position for one axis: the inverse of [`shift_axis`].
fn screen_axis(entity: i16, world: i16, screen: i16) -> i16 {
    if entity < screen / 2 {
        entity
    } else if entity > world - screen / 2 {
        entity - (world - screen)
    } else {
        screen / 2
    }
}

/// Offset at which the map is drawn so the viewport follows the entity.
///
/// Zero while the entity is within half a screen of the world's top-left,
/// pinned to `screen - world` near the opposite edges, and `screen/2 -
/// entity` in between.
pub fn viewport_shift(entity_x: i16, entity_y: i16) -> (i16, i16) {
    (
        shift_axis(entity_x, WORLD_WIDTH, SCREEN_WIDTH),
        shift_axis(entity_y, WORLD_HEIGHT, SCREEN_HEIGHT),
    )
}

/// World pixel at the screen's top-left corner (the negated shift).
pub fn world_origin(entity_x: i16, entity_y: i16) -> (i16, i16) {
    let (sx, sy) = viewport_shift(entity_x, entity_y);
    (-sx, -sy)
}

/// Where the entity is drawn on screen.
///
/// Clamped to the screen centre except near world edges, where the entity
/// moves across the screen while the viewport stays pinned.
pub fn player_screen_position(entity_x: i16, entity_y: i16) -> (i16, i16) {
    (
        screen_axis(entity_x, WORLD_WIDTH, SCREEN_WIDTH),
        screen_axis(entity_y, WORLD_HEIGHT, SCREEN_HEIGHT),
    )
}
