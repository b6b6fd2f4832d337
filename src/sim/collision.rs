//! Collision response between the ball and the paddle or a brick
//!
//! Both resolvers only ever assign `±ball_speed` to a velocity component, so
//! the ball keeps a constant per-axis speed however many hits it takes.

use super::bounds::{Bounds, intersects};
use super::state::{Ball, Brick, Paddle};
use crate::config::{Playfield, VerticalSideRule};

/// How far the ball has pushed into a box from each side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Ball's right edge past the box's left edge
    pub left: f32,
    /// Box's right edge past the ball's left edge
    pub right: f32,
    /// Ball's bottom edge past the box's top edge
    pub top: f32,
    /// Box's bottom edge past the ball's top edge
    pub bottom: f32,
}

impl Penetration {
    pub fn between<A: Bounds + ?Sized, B: Bounds + ?Sized>(ball: &A, target: &B) -> Self {
        Self {
            left: ball.right() - target.left(),
            right: target.right() - ball.left(),
            top: ball.bottom() - target.top(),
            bottom: target.bottom() - ball.top(),
        }
    }

    /// True when the ball crossed the left face (shallower than the right)
    pub fn from_left(&self) -> bool {
        self.left.abs() < self.right.abs()
    }

    /// True when the ball crossed the top face under the given rule
    pub fn from_top(&self, rule: VerticalSideRule) -> bool {
        match rule {
            VerticalSideRule::Compare => self.top.abs() < self.bottom.abs(),
            VerticalSideRule::AlwaysBelow => false,
        }
    }

    /// Shallowest horizontal overlap
    pub fn min_x(&self) -> f32 {
        if self.from_left() { self.left } else { self.right }
    }

    /// Shallowest vertical overlap under the given rule
    pub fn min_y(&self, rule: VerticalSideRule) -> f32 {
        if self.from_top(rule) { self.top } else { self.bottom }
    }
}

/// Axis whose velocity a brick hit flipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactAxis {
    Horizontal,
    Vertical,
}

/// Steer the ball off the paddle
///
/// The ball always leaves upward; it goes left when it struck left of the
/// paddle center and right otherwise. Returns false (and leaves the ball
/// untouched) when the two do not overlap.
pub fn resolve_paddle_ball(paddle: &Paddle, ball: &mut Ball, playfield: &Playfield) -> bool {
    if !intersects(paddle, ball) {
        return false;
    }

    let speed = playfield.ball_speed;
    ball.vel.y = -speed;
    ball.vel.x = if ball.x() < paddle.x() { -speed } else { speed };
    true
}

/// Destroy a brick the ball touches and bounce the ball off it
///
/// Bricks already flagged this frame are skipped. The axis with the shallower
/// penetration is taken as the axis of impact and only that velocity
/// component is changed, pointing back toward the side the ball came from.
pub fn resolve_brick_ball(
    brick: &mut Brick,
    ball: &mut Ball,
    playfield: &Playfield,
) -> Option<ImpactAxis> {
    if brick.destroyed || !intersects(brick, ball) {
        return None;
    }

    brick.destroyed = true;

    let rule = playfield.vertical_side_rule;
    let speed = playfield.ball_speed;
    let pen = Penetration::between(ball, brick);

    if pen.min_x().abs() < pen.min_y(rule).abs() {
        ball.vel.x = if pen.from_left() { -speed } else { speed };
        Some(ImpactAxis::Horizontal)
    } else {
        ball.vel.y = if pen.from_top(rule) { -speed } else { speed };
        Some(ImpactAxis::Vertical)
    }
}
