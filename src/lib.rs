//! Brick Breaker - simulation core for a single-paddle brick-breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, AABB collisions, frame update)
//! - `config`: Playfield constants, loading and validation
//! - `input`: Input sources polled once per frame
//! - `present`: Read-only shape snapshot pulled by a rendering layer
//!
//! Window creation, drawing and frame pacing live outside this crate.

pub mod config;
pub mod input;
pub mod present;
pub mod sim;

pub use config::{ConfigError, Playfield, VerticalSideRule};
pub use input::InputSource;

/// Default playfield constants
pub mod consts {
    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-axis ball speed (pixels per frame); only the sign ever changes
    pub const BALL_SPEED: f32 = 8.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 60.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Distance from the bottom window edge to the paddle center
    pub const PADDLE_BOTTOM_OFFSET: f32 = 50.0;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 60.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Spacing between neighbouring bricks
    pub const BRICK_GAP: f32 = 3.0;
    /// Extra horizontal shift applied to the whole grid
    pub const GRID_OFFSET_X: f32 = 22.0;
    pub const GRID_COLUMNS: u32 = 11;
    pub const GRID_ROWS: u32 = 4;
}
