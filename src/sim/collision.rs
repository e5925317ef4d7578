//! Collision detection and response for the ball
//!
//! Walls flip `dy`; paddles re-aim the ball based on where it struck the face.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::consts::*;
use crate::deg_to_rad;

/// Bounce off the top/bottom wall. Returns true if the ball bounced.
pub fn ball_wall_collision(ball: &mut Ball, arena_height: f32) -> bool {
    if ball.top() <= 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
        true
    } else if ball.bottom() >= arena_height {
        ball.pos.y = arena_height - ball.radius;
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Whether the ball's vertical span overlaps the paddle's
#[inline]
pub fn overlaps_vertically(ball: &Ball, paddle: &Paddle) -> bool {
    ball.bottom() >= paddle.y && ball.top() <= paddle.bottom()
}

/// Check and resolve contact between the ball and the paddle on `side`.
///
/// Only a ball travelling toward the paddle whose leading edge has reached
/// the paddle's inner face can hit it. On a hit the ball is snapped just
/// outside the face and reflected. Returns true on a hit.
pub fn ball_paddle_collision(ball: &mut Ball, paddle: &Paddle, side: Side) -> bool {
    let reached = match side {
        Side::Left => ball.vel.x < 0.0 && ball.pos.x - ball.radius <= paddle.x + paddle.width,
        Side::Right => ball.vel.x > 0.0 && ball.pos.x + ball.radius >= paddle.x,
    };
    if !reached || !overlaps_vertically(ball, paddle) {
        return false;
    }

    ball.pos.x = match side {
        Side::Left => paddle.x + paddle.width + ball.radius,
        Side::Right => paddle.x - ball.radius,
    };
    reflect_off_paddle(ball, paddle, side);
    true
}

/// Normalized impact offset on the paddle face: -1 at the top edge, +1 at
/// the bottom, 0 at center
#[inline]
pub fn relative_intersect(ball_y: f32, paddle: &Paddle) -> f32 {
    let half = paddle.height / 2.0;
    if half <= 0.0 {
        return 0.0;
    }
    ((ball_y - paddle.center_y()) / half).clamp(-1.0, 1.0)
}

/// Re-aim the ball off a paddle: edge hits return steep, center hits flat.
/// Speed gains one increment, capped at `MAX_BALL_SPEED`.
pub fn reflect_off_paddle(ball: &mut Ball, paddle: &Paddle, side: Side) {
    let bounce_angle = relative_intersect(ball.pos.y, paddle) * deg_to_rad(MAX_BOUNCE_ANGLE_DEG);
    ball.speed = (ball.speed + BALL_SPEED_INCREMENT).min(MAX_BALL_SPEED);

    // Away from the paddle that was hit
    let dir = side.opposite().direction();
    ball.vel = Vec2::new(
        dir * ball.speed * bounce_angle.cos(),
        ball.speed * bounce_angle.sin(),
    );
}
