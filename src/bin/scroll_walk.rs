//! Stored-offset tilemap walker.
//!
//! Demo 2: the scroll offsets live in the state and are updated on every
//! successful step; a blocked step restores the pre-move snapshot, leaving
//! both the player position and the offsets untouched.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_tilewalk::core::ScrollState;
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
    let mut state = ScrollState::new();
    let view = MapView::default();
    let mut input = InputHandler::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render from the stored offsets, not a derived camera.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let player = state.player();
        let shift = state.shift();
        let screen = state.player_screen_position();
        let status = format!(
            "world ({:>3},{:>3})  scroll ({:>3},{:>3})  arrows/wasd walk, q quits",
            player.x, player.y, shift.0, shift.1
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
