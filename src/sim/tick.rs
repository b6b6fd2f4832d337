//! Per-frame simulation tick
//!
//! Core game loop step that advances the world deterministically. The order
//! of the steps is fixed: ball, paddle, paddle/ball, every brick/ball, then
//! compaction of destroyed bricks.

use serde::{Deserialize, Serialize};

use super::collision::{resolve_brick_ball, resolve_paddle_ball};
use super::state::{GamePhase, GameState, WallBounce};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Move paddle left
    pub left: bool,
    /// Move paddle right
    pub right: bool,
    /// Stop the simulation at this frame boundary
    pub stop: bool,
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameEvents {
    /// Frame number after the tick
    pub frame: u64,
    /// Walls the ball turned around at
    pub wall: WallBounce,
    /// Ball was steered by the paddle
    pub paddle_hit: bool,
    /// Ids of bricks destroyed (and already removed) this frame
    pub destroyed: Vec<u32>,
    /// Simulation is stopped; nothing moved
    pub stopped: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> FrameEvents {
    if state.phase == GamePhase::Stopped {
        return FrameEvents {
            frame: state.frame,
            stopped: true,
            ..Default::default()
        };
    }

    if input.stop {
        state.phase = GamePhase::Stopped;
        log::info!(
            "Stop requested after {} frames ({} bricks left)",
            state.frame,
            state.bricks.len()
        );
        return FrameEvents {
            frame: state.frame,
            stopped: true,
            ..Default::default()
        };
    }

    state.frame += 1;

    let GameState {
        playfield,
        ball,
        paddle,
        bricks,
        ..
    } = &mut *state;

    let wall = ball.advance(playfield);
    if wall.horizontal || wall.vertical {
        log::debug!(
            "Ball bounced off wall at ({:.1}, {:.1})",
            ball.pos.x,
            ball.pos.y
        );
    }

    paddle.advance(input.left, input.right, playfield);

    let paddle_hit = resolve_paddle_ball(paddle, ball, playfield);

    let mut destroyed = Vec::new();
    for brick in bricks.iter_mut() {
        if let Some(axis) = resolve_brick_ball(brick, ball, playfield) {
            log::debug!("Brick {} destroyed ({:?} impact)", brick.id, axis);
            destroyed.push(brick.id);
        }
    }

    state.compact_bricks();

    log::trace!(
        "Frame {}: ball=({:.1}, {:.1}) paddle_x={:.1} bricks={}",
        state.frame,
        state.ball.pos.x,
        state.ball.pos.y,
        state.paddle.pos.x,
        state.bricks.len()
    );

    FrameEvents {
        frame: state.frame,
        wall,
        paddle_hit,
        destroyed,
        stopped: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Playfield;
    use crate::sim::bounds::Bounds;
    use glam::Vec2;

    fn new_state() -> GameState {
        GameState::new(Playfield::default()).unwrap()
    }

    #[test]
    fn test_first_tick_moves_ball() {
        let mut state = new_state();
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events.frame, 1);
        assert!(!events.stopped);
        assert_eq!(state.ball.pos, Vec2::new(392.0, 292.0));
        assert_eq!(state.bricks.len(), 44);
    }

    #[test]
    fn test_stop_takes_effect_at_frame_boundary() {
        let mut state = new_state();
        tick(&mut state, &TickInput::default());
        let before = state.ball.pos;

        let stop = TickInput {
            stop: true,
            left: true,
            ..Default::default()
        };
        let events = tick(&mut state, &stop);
        assert!(events.stopped);
        assert_eq!(state.phase, GamePhase::Stopped);
        assert_eq!(state.frame, 1);
        assert_eq!(state.ball.pos, before);
        assert_eq!(state.paddle.vel, Vec2::ZERO);

        // Stopped is terminal
        let events = tick(&mut state, &TickInput::default());
        assert!(events.stopped);
        assert_eq!(state.frame, 1);
        assert_eq!(state.ball.pos, before);
    }

    #[test]
    fn test_paddle_follows_input() {
        let mut state = new_state();
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &right);
        tick(&mut state, &right);
        tick(&mut state, &right);
        assert_eq!(state.paddle.pos.x, 416.0);
        assert_eq!(state.paddle.pos.y, 550.0);
    }

    #[test]
    fn test_paddle_hit_runs_before_bricks() {
        let mut state = new_state();
        // Ball about to land on the paddle, left of its center
        state.ball.pos = Vec2::new(388.0, 528.0);
        state.ball.vel = Vec2::new(-8.0, 8.0);

        let events = tick(&mut state, &TickInput::default());
        assert!(events.paddle_hit);
        assert_eq!(state.ball.vel, Vec2::new(-8.0, -8.0));
    }

    #[test]
    fn test_brick_destroyed_and_removed_same_frame() {
        let mut state = new_state();
        // Bottom row of the first column, nothing below it
        let target = state.bricks[3].clone();
        state.ball.pos = Vec2::new(target.pos.x, target.bottom() + state.ball.radius + 4.0);
        state.ball.vel = Vec2::new(8.0, -8.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events.destroyed, vec![target.id]);
        assert_eq!(state.bricks.len(), 43);
        assert!(state.bricks.iter().all(|b| b.id != target.id));
        // Bounced back down
        assert_eq!(state.ball.vel.y, 8.0);
        assert_eq!(state.ball.vel.x, 8.0);
    }

    #[test]
    fn test_two_bricks_in_one_frame() {
        let mut state = new_state();
        // Bricks 1 and 2 share column 0 (y=46 and y=69); the gap between them
        // is at y 56..59
        state.ball.pos = Vec2::new(85.0, 65.5);
        state.ball.vel = Vec2::new(8.0, -8.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events.destroyed.len(), 2);
        assert_eq!(state.bricks.len(), 42);
        assert_eq!(state.ball.vel.x.abs(), 8.0);
        assert_eq!(state.ball.vel.y.abs(), 8.0);
    }

    #[test]
    fn test_clearing_every_brick_empties_collection() {
        let mut state = new_state();
        assert_eq!(state.bricks.len(), 44);

        // Park the ball in open space so only flagged bricks go
        let input = TickInput::default();
        while !state.bricks.is_empty() {
            state.ball.pos = Vec2::new(400.0, 300.0);
            let n = state.bricks.len().min(5);
            for brick in state.bricks.iter_mut().take(n) {
                brick.destroyed = true;
            }
            let before = state.bricks.len();
            tick(&mut state, &input);
            assert_eq!(state.bricks.len(), before - n);
            assert!(state.bricks.iter().all(|b| !b.destroyed));
        }
        assert_eq!(state.bricks.len(), 0);

        // World keeps running with no bricks
        let events = tick(&mut state, &input);
        assert!(!events.stopped);
        assert!(events.destroyed.is_empty());
    }

    #[test]
    fn test_speed_invariant_over_long_run() {
        let mut state = new_state();
        let speed = state.playfield().ball_speed;
        for i in 0..5_000u32 {
            let input = TickInput {
                left: i % 90 < 40,
                right: i % 90 >= 50,
                stop: false,
            };
            tick(&mut state, &input);
            assert_eq!(state.ball.vel.x.abs(), speed);
            assert_eq!(state.ball.vel.y.abs(), speed);
            assert!(state.paddle.left() >= 0.0);
            assert!(state.paddle.right() <= state.playfield().window_width);
        }
    }

    #[test]
    fn test_determinism() {
        let mut state1 = new_state();
        let mut state2 = new_state();

        let inputs = [
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                right: true,
                ..Default::default()
            },
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.frame, state2.frame);
        assert_eq!(state1.ball.pos, state2.ball.pos);
        assert_eq!(state1.paddle.pos, state2.paddle.pos);
        assert_eq!(state1.bricks.len(), state2.bricks.len());
    }
}
