//! Held-direction input handler for terminal environments.
//!
//! Terminals may not emit key release events; while a key is held they
//! instead repeat press events. Each direction therefore auto-releases
//! after a short timeout unless refreshed, and [`InputHandler::update`]
//! emits exactly one step per held direction per update tick.

use std::time::Instant;

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::input::map::direction_for_key_code;
use crate::types::Direction;

// A single tap must not turn into a sustained "held" state on terminals
// without key-release events; auto-repeat refreshes faster than this.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks which movement directions are currently held.
#[derive(Debug, Clone)]
pub struct InputHandler {
    held: [bool; 4],
    last_seen: [Instant; 4],
    release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            held: [false; 4],
            last_seen: [now; 4],
            release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    pub fn release_timeout_ms(&self) -> u32 {
        self.release_timeout_ms
    }

    /// Record a key press or terminal auto-repeat.
    ///
    /// Both refresh the hold; the step itself is emitted from [`update`](Self::update)
    /// so movement speed stays one pixel per tick regardless of the
    /// terminal's repeat rate.
    pub fn key_event(&mut self, code: KeyCode) {
        if let Some(dir) = direction_for_key_code(code) {
            self.held[dir.index()] = true;
            self.last_seen[dir.index()] = Instant::now();
        }
    }

    /// Record a key release (on terminals that report them).
    pub fn key_release(&mut self, code: KeyCode) {
        if let Some(dir) = direction_for_key_code(code) {
            self.held[dir.index()] = false;
        }
    }

    /// Directions to step this tick: one entry per held direction.
    ///
    /// Directions whose last event is older than the release timeout are
    /// dropped first.
    pub fn update(&mut self) -> ArrayVec<Direction, 4> {
        let mut steps = ArrayVec::new();

        for dir in Direction::ALL {
            let idx = dir.index();
            if !self.held[idx] {
                continue;
            }
            let age_ms = self.last_seen[idx].elapsed().as_millis() as u32;
            if age_ms > self.release_timeout_ms {
                self.held[idx] = false;
                continue;
            }
            steps.push(dir);
        }

        steps
    }

    pub fn reset(&mut self) {
        self.held = [false; 4];
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
