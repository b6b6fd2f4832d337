//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame, no wall-clock time
//! - Stable iteration order (bricks in creation order)
//! - No rendering or platform dependencies

pub mod bounds;
pub mod collision;
pub mod state;
pub mod tick;

pub use bounds::{Aabb, Bounds, intersects};
pub use collision::{ImpactAxis, Penetration, resolve_brick_ball, resolve_paddle_ball};
pub use state::{Ball, Brick, GamePhase, GameState, Paddle, WallBounce, build_grid};
pub use tick::{FrameEvents, TickInput, tick};
