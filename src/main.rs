//! Camera-follow tilemap walker (default binary).
//!
//! Demo 1: the viewport offset and the player's screen position are derived
//! from the player's world position every frame. Holding a direction key
//! walks the player one pixel per 16 ms tick, with collision against
//! non-walkable tiles.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_tilewalk::core::{camera, GameState};
use tui_tilewalk::input::{should_quit, InputHandler};
use tui_tilewalk::term::{MapView, TerminalRenderer, Viewport};
use tui_tilewalk::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut state = GameState::new();
    let view = MapView::default();
    let mut input = InputHandler::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let player = state.player();
        let shift = camera::viewport_shift(player.x, player.y);
        let screen = camera::player_screen_position(player.x, player.y);
        let status = format!(
            "world ({:>3},{:>3})  screen ({:>3},{:>3})  arrows/wasd walk, q quits",
            player.x, player.y, screen.0, screen.1
        );
        let fb = view.render(state.map(), shift, screen, &status, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        input.key_event(key.code);
                    }
                    KeyEventKind::Release => {
                        input.key_release(key.code);
                    }
                },
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick: one pixel per held direction.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for dir in input.update() {
                state.step(dir);
            }
        }
    }
}
