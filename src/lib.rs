//! Paddle Rally - a two-paddle ball game simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scoring, game mode)
//! - `input`: Keyboard/pointer state to per-tick paddle deltas
//! - `audio`: Event to sound cue mapping (no synthesis)
//! - `hud`: Score labels and flash timers for presentation
//! - `settings`: Player-facing configuration

pub mod audio;
pub mod hud;
pub mod input;
pub mod settings;
pub mod sim;

pub use settings::{OpponentPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Nominal simulation timestep (60 Hz, one tick per frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions (logical units, independent of display scaling)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 20.0;
    /// Player paddle step per tick
    pub const PADDLE_SPEED: f32 = 6.0;

    /// Scripted opponent per-tick speed cap
    pub const DEFAULT_OPPONENT_SPEED: f32 = 5.0;
    pub const MAX_OPPONENT_SPEED: f32 = 12.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const INITIAL_BALL_SPEED: f32 = 5.0;
    /// Speed added on every paddle contact
    pub const BALL_SPEED_INCREMENT: f32 = 0.3;
    pub const MAX_BALL_SPEED: f32 = 14.0;

    /// Steepest return angle off a paddle edge
    pub const MAX_BOUNCE_ANGLE_DEG: f32 = 65.0;
    /// Serve launch angle range (± from horizontal)
    pub const SERVE_ANGLE_DEG: f32 = 30.0;

    /// Background flash length after a goal
    pub const SCORE_FLASH_TICKS: u32 = 18;
}

/// Degrees to radians
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * std::f32::consts::PI / 180.0
}

/// Clamp a paddle's top edge into `[0, arena_height - paddle_height]`.
///
/// Never panics, even for a paddle taller than the arena; non-finite input
/// falls back to the vertical center.
#[inline]
pub fn clamp_paddle_y(y: f32, paddle_height: f32, arena_height: f32) -> f32 {
    let max_y = (arena_height - paddle_height).max(0.0);
    if !y.is_finite() {
        return max_y / 2.0;
    }
    y.max(0.0).min(max_y)
}
