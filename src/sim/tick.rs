//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. One call is
//! always exactly one step of simulated time; there is no delta-time scaling.

use super::collision::{ball_paddle_collision, ball_wall_collision};
use super::mode::GameMode;
use super::scoring::Scoreboard;
use super::state::{GameEvent, GameState, Side};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Vertical movement for the player paddle (negative = up).
    /// Clamped to ±PADDLE_SPEED by the engine.
    pub player_delta: f32,
}

impl TickInput {
    pub fn new(player_delta: f32) -> Self {
        Self { player_delta }
    }
}

/// Advance the game state by one fixed timestep and report what happened.
///
/// A no-op unless the mode is `Playing`.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.mode != GameMode::Playing {
        return events;
    }

    state.time_ticks += 1;

    // Callers can write paddle fields directly; never trust them
    state.left_paddle.clamp();
    state.right_paddle.clamp();

    // Player paddle
    let delta = if input.player_delta.is_finite() {
        input.player_delta.clamp(-PADDLE_SPEED, PADDLE_SPEED)
    } else {
        log::warn!("Ignoring non-finite player input {}", input.player_delta);
        0.0
    };
    state.left_paddle.nudge(delta);

    // Opponent chases the ball
    state.right_paddle.chase(state.ball.pos.y);

    // Ball integration (single Euler step)
    state.ball.pos += state.ball.vel;

    if ball_wall_collision(&mut state.ball, ARENA_HEIGHT) {
        events.push(GameEvent::WallBounce);
    }

    if ball_paddle_collision(&mut state.ball, &state.left_paddle, Side::Left) {
        events.push(GameEvent::PaddleHit(Side::Left));
    }
    if ball_paddle_collision(&mut state.ball, &state.right_paddle, Side::Right) {
        events.push(GameEvent::PaddleHit(Side::Right));
    }

    let scorer = if state.ball.pos.x + state.ball.radius < 0.0 {
        Some(Side::Right)
    } else if state.ball.pos.x - state.ball.radius > ARENA_WIDTH {
        Some(Side::Left)
    } else {
        None
    };

    if let Some(scorer) = scorer {
        let (left, right) = state.scoreboard.record_goal(scorer);
        log::debug!(
            "Goal {} at tick {}: {left}-{right}",
            scorer.as_str(),
            state.time_ticks
        );
        events.push(GameEvent::Goal(scorer));
        events.push(state.serve(Some(Scoreboard::receiver_after_goal(scorer))));
    }

    events
}
