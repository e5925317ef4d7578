//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Events returned as data, never dispatched
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod mode;
pub mod scoring;
pub mod state;
pub mod stepper;
pub mod tick;

pub use collision::{ball_paddle_collision, ball_wall_collision, reflect_off_paddle, relative_intersect};
pub use mode::{GameMode, ModeAction, ModeError};
pub use scoring::Scoreboard;
pub use state::{Ball, EntitySnapshot, GameEvent, GameState, Paddle, RngState, Side};
pub use stepper::FixedStepper;
pub use tick::{TickInput, tick};
