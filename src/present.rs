//! Read-only presentation snapshot
//!
//! A rendering layer pulls a [`Drawable`] list after each tick. Order is ball,
//! paddle, then every active brick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// Shape to draw, in the entity's own terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeKind {
    Circle { radius: f32 },
    Rect { size: Vec2 },
}

/// Which entity a drawable came from (colour lookup for renderers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Ball,
    Paddle,
    Brick,
}

impl EntityKind {
    /// Default fill colour (RGBA)
    pub fn color(&self) -> [f32; 4] {
        match self {
            EntityKind::Ball => [1.0, 0.0, 0.0, 1.0],
            EntityKind::Paddle => [1.0, 0.0, 0.0, 1.0],
            EntityKind::Brick => [1.0, 1.0, 0.0, 1.0],
        }
    }
}

/// One thing to draw this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    pub entity: EntityKind,
    /// Center position
    pub pos: Vec2,
    #[serde(flatten)]
    pub kind: ShapeKind,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub drawables: Vec<Drawable>,
}

/// Collect drawables in the conventional order
pub fn snapshot(state: &GameState) -> FrameSnapshot {
    let mut drawables = Vec::with_capacity(2 + state.bricks.len());

    drawables.push(Drawable {
        entity: EntityKind::Ball,
        pos: state.ball.pos,
        kind: ShapeKind::Circle {
            radius: state.ball.radius,
        },
    });

    drawables.push(Drawable {
        entity: EntityKind::Paddle,
        pos: state.paddle.pos,
        kind: ShapeKind::Rect {
            size: state.paddle.size,
        },
    });

    drawables.extend(state.bricks.iter().map(|brick| Drawable {
        entity: EntityKind::Brick,
        pos: brick.pos,
        kind: ShapeKind::Rect { size: brick.size },
    }));

    FrameSnapshot {
        frame: state.frame,
        drawables,
    }
}
