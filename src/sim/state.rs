//! Game state and core simulation types
//!
//! Everything the engine mutates lives in [`GameState`]; there is no
//! process-wide game object, so independent simulations never interfere.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::mode::GameMode;
use super::scoring::Scoreboard;
use crate::consts::*;
use crate::{clamp_paddle_y, deg_to_rad};

/// One side of the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal direction pointing *toward* this side
    pub fn direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Discrete things that happened during a tick
///
/// Plain data for audio/visual collaborators; the engine never calls them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball was returned by a paddle
    PaddleHit(Side),
    /// The given side scored
    Goal(Side),
    /// Ball was placed at center and launched
    ServeReset,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Per-tick displacement (dx, dy)
    pub vel: Vec2,
    pub radius: f32,
    /// Scalar speed used whenever the ball is re-aimed
    pub speed: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            speed: INITIAL_BALL_SPEED,
        }
    }
}

impl Ball {
    /// Place the ball at center and launch it within ±SERVE_ANGLE_DEG of horizontal.
    ///
    /// `towards` picks the horizontal direction; `None` flips a coin.
    pub fn serve<R: Rng>(&mut self, rng: &mut R, towards: Option<Side>) {
        self.pos = Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0);
        self.speed = INITIAL_BALL_SPEED;

        let angle = deg_to_rad(rng.random_range(-SERVE_ANGLE_DEG..=SERVE_ANGLE_DEG));
        let side = towards.unwrap_or_else(|| {
            if rng.random_bool(0.5) {
                Side::Left
            } else {
                Side::Right
            }
        });

        self.vel = Vec2::new(
            side.direction() * self.speed * angle.cos(),
            self.speed * angle.sin(),
        );
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// A paddle; `y` is its top edge and the only field that moves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Max movement per tick (only used by the scripted opponent)
    pub speed: f32,
}

impl Paddle {
    /// Paddle pinned to the given side, vertically centered
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => ARENA_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH,
        };
        Self {
            x,
            y: (ARENA_HEIGHT - PADDLE_HEIGHT) / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: DEFAULT_OPPONENT_SPEED,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Re-apply the arena bound to `y`
    #[inline]
    pub fn clamp(&mut self) {
        self.y = clamp_paddle_y(self.y, self.height, ARENA_HEIGHT);
    }

    /// Move by `delta` and clamp
    pub fn nudge(&mut self, delta: f32) {
        self.y += delta;
        self.clamp();
    }

    /// Chase the ball's vertical position, never overshooting and never
    /// moving more than `speed` in one tick. Returns the applied movement.
    pub fn chase(&mut self, ball_y: f32) -> f32 {
        let target = ball_y - self.height / 2.0;
        let diff = target - self.y;
        let cap = if self.speed.is_finite() { self.speed.max(0.0) } else { 0.0 };
        let step = diff.signum() * cap.min(diff.abs());
        let before = self.y;
        self.nudge(step);
        self.y - before
    }
}

/// Read-only copy of entity positions for rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
}

/// RNG state wrapper for serialization
///
/// Every serve derives a fresh generator from `(seed, stream)` and bumps
/// `stream`, so a saved state replays the same serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn next_rng(&mut self) -> Pcg32 {
        let mixed = self
            .seed
            .wrapping_add(self.stream.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        self.stream = self.stream.wrapping_add(1);
        Pcg32::seed_from_u64(mixed)
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    /// Ticks actually simulated (paused/menu ticks don't count)
    pub time_ticks: u64,
    pub(crate) mode: GameMode,
    pub ball: Ball,
    /// Player paddle
    pub left_paddle: Paddle,
    /// Scripted opponent
    pub right_paddle: Paddle,
    pub(crate) scoreboard: Scoreboard,
}

impl GameState {
    /// Create a new state in `Menu` with a ball already served
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng_state: RngState::new(seed),
            time_ticks: 0,
            mode: GameMode::Menu,
            ball: Ball::default(),
            left_paddle: Paddle::new(Side::Left),
            right_paddle: Paddle::new(Side::Right),
            scoreboard: Scoreboard::default(),
        };
        state.serve(None);
        state
    }

    /// Serve reset; returns the event to report
    pub fn serve(&mut self, towards: Option<Side>) -> GameEvent {
        let mut rng = self.rng_state.next_rng();
        self.ball.serve(&mut rng, towards);
        log::trace!(
            "Serve #{} towards {}: vel=({:.3}, {:.3})",
            self.rng_state.stream,
            towards.map_or("random", |s| s.as_str()),
            self.ball.vel.x,
            self.ball.vel.y
        );
        GameEvent::ServeReset
    }

    pub fn entities(&self) -> EntitySnapshot {
        EntitySnapshot {
            ball: self.ball,
            left_paddle: self.left_paddle,
            right_paddle: self.right_paddle,
        }
    }

    /// `(left, right)`
    pub fn scores(&self) -> (u32, u32) {
        self.scoreboard.totals()
    }

    /// Reconfigure the opponent's per-tick cap; takes effect next tick
    pub fn set_opponent_speed(&mut self, speed: f32) {
        if !speed.is_finite() {
            log::warn!("Ignoring non-finite opponent speed {speed}");
            return;
        }
        self.right_paddle.speed = speed.clamp(0.0, MAX_OPPONENT_SPEED);
    }

    pub fn opponent_speed(&self) -> f32 {
        self.right_paddle.speed
    }

    /// Zero both counters and serve in a random direction
    pub fn reset_scores(&mut self) -> (u32, u32) {
        self.scoreboard.reset();
        self.serve(None);
        log::debug!("Scores reset");
        self.scores()
    }
}
