//! MapView: maps the world and player into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The emulated 220x176 px screen is drawn at one terminal cell per 4x8 px
//! block (55x22 cells), which roughly squares up a 16x16 px tile on typical
//! terminal glyphs and fits an 80x24 terminal. All game math stays in
//! pixels; the block scale exists only here.

use crate::core::Tilemap;
use crate::term::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{TileKind, PLAYER_HEIGHT, PLAYER_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the tilemap demos.
pub struct MapView {
    /// Screen pixels per terminal column.
    px_per_cell_x: i16,
    /// Screen pixels per terminal row.
    px_per_cell_y: i16,
}

impl Default for MapView {
    fn default() -> Self {
        // 4x8 compensates for typical terminal glyph aspect ratio.
        Self {
            px_per_cell_x: 4,
            px_per_cell_y: 8,
        }
    }
}

impl MapView {
    pub fn new(px_per_cell_x: i16, px_per_cell_y: i16) -> Self {
        Self {
            px_per_cell_x,
            px_per_cell_y,
        }
    }

    /// Screen size in terminal cells.
    pub fn screen_cells(&self) -> (u16, u16) {
        (
            (SCREEN_WIDTH / self.px_per_cell_x) as u16,
            (SCREEN_HEIGHT / self.px_per_cell_y) as u16,
        )
    }

    /// Render one frame: the visible map window at `shift`, the player
    /// sprite at `player_screen`, and a status line under the frame.
    pub fn render(
        &self,
        map: &Tilemap,
        shift: (i16, i16),
        player_screen: (i16, i16),
        status: &str,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let (cols, rows) = self.screen_cells();
        let frame_w = cols + 2;
        let frame_h = rows + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2;

        self.draw_tiles(&mut fb, map, shift, start_x, start_y);
        self.draw_player(&mut fb, player_screen, start_x, start_y);
        draw_border(&mut fb, start_x, start_y, frame_w, frame_h);

        let status_style = CellStyle::new(Rgb::new(140, 140, 150), Rgb::new(0, 0, 0));
        fb.put_str(start_x, start_y + frame_h, status, status_style);

        fb
    }

    fn draw_tiles(
        &self,
        fb: &mut FrameBuffer,
        map: &Tilemap,
        shift: (i16, i16),
        start_x: u16,
        start_y: u16,
    ) {
        let (cols, rows) = self.screen_cells();
        for cy in 0..rows {
            for cx in 0..cols {
                // Sample at the block centre so tile edges round evenly.
                let sx = cx as i16 * self.px_per_cell_x + self.px_per_cell_x / 2;
                let sy = cy as i16 * self.px_per_cell_y + self.px_per_cell_y / 2;
                let cell = match map.tile_at_pixel(sx - shift.0, sy - shift.1) {
                    Some(kind) => tile_cell(kind),
                    None => Cell::default(),
                };
                fb.set(start_x + 1 + cx, start_y + 1 + cy, cell);
            }
        }
    }

    fn draw_player(
        &self,
        fb: &mut FrameBuffer,
        player_screen: (i16, i16),
        start_x: u16,
        start_y: u16,
    ) {
        let (cols, rows) = self.screen_cells();
        let (px, py) = player_screen;
        if px < 0 || py < 0 {
            return;
        }

        let sprite = Cell::new('█', CellStyle::new(Rgb::new(235, 140, 90), Rgb::new(0, 0, 0)));
        let col0 = px / self.px_per_cell_x;
        let col1 = (px + PLAYER_WIDTH - 1) / self.px_per_cell_x;
        let row0 = py / self.px_per_cell_y;
        let row1 = (py + PLAYER_HEIGHT - 1) / self.px_per_cell_y;

        for row in row0..=row1 {
            for col in col0..=col1 {
                if col < 0 || row < 0 || col as u16 >= cols || row as u16 >= rows {
                    continue;
                }
                fb.set(start_x + 1 + col as u16, start_y + 1 + row as u16, sprite);
            }
        }
    }
}

fn tile_cell(kind: TileKind) -> Cell {
    let grass_bg = Rgb::new(44, 110, 52);
    match kind {
        TileKind::Water => Cell::new('~', CellStyle::new(Rgb::new(90, 150, 220), Rgb::new(24, 56, 120))),
        TileKind::Green => Cell::new(' ', CellStyle::new(Rgb::new(90, 170, 100), grass_bg)),
        TileKind::Tree => Cell::new('Y', CellStyle::new(Rgb::new(24, 68, 30), grass_bg)),
        TileKind::Grass => Cell::new('"', CellStyle::new(Rgb::new(150, 180, 70), grass_bg)),
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);
}
