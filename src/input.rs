//! Input adapters
//!
//! Turns keyboard/pointer state into the per-tick paddle delta the engine
//! expects. Event capture itself belongs to the host platform.

use crate::consts::{ARENA_HEIGHT, PADDLE_SPEED};
use crate::sim::{Paddle, TickInput};

impl TickInput {
    /// Arrow-key style control: each held key moves one fixed step
    pub fn from_keys(up: bool, down: bool) -> Self {
        let mut delta = 0.0;
        if up {
            delta -= PADDLE_SPEED;
        }
        if down {
            delta += PADDLE_SPEED;
        }
        Self::new(delta)
    }

    /// Pointer/touch control: step the paddle center toward `pointer_y`
    /// (logical units), no faster than the keyboard would.
    pub fn toward_pointer(pointer_y: f32, paddle: &Paddle) -> Self {
        if !pointer_y.is_finite() {
            return Self::default();
        }
        let delta = pointer_y - paddle.center_y();
        Self::new(delta.clamp(-PADDLE_SPEED, PADDLE_SPEED))
    }
}

/// Map a display-space Y coordinate into the logical arena.
///
/// `rect_top`/`rect_height` describe where the arena is drawn on screen.
pub fn display_to_logical_y(client_y: f32, rect_top: f32, rect_height: f32) -> f32 {
    if rect_height <= 0.0 {
        return ARENA_HEIGHT / 2.0;
    }
    (client_y - rect_top) * (ARENA_HEIGHT / rect_height)
}
