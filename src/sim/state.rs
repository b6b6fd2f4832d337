//! Game state and core simulation types
//!
//! The coordinator owns one [`Ball`], one [`Paddle`] and the active bricks.
//! Positions are centers; velocities are in pixels per frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use crate::config::{ConfigError, Playfield};

/// Whether the frame loop is still advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active simulation
    Running,
    /// A stop was requested; further ticks do nothing
    Stopped,
}

/// Which walls the ball bounced off during one move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallBounce {
    pub horizontal: bool,
    pub vertical: bool,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Create a ball heading up and to the left
    pub fn new(pos: Vec2, playfield: &Playfield) -> Self {
        Self {
            pos,
            vel: Vec2::splat(-playfield.ball_speed),
            radius: playfield.ball_radius,
        }
    }

    /// Move by the current velocity, then turn around at the window edges
    ///
    /// Velocity components are assigned, never negated, so `|vx|` and `|vy|`
    /// stay equal to the ball speed.
    pub fn advance(&mut self, playfield: &Playfield) -> WallBounce {
        self.pos += self.vel;

        let speed = playfield.ball_speed;
        let mut bounce = WallBounce::default();

        if self.left() < 0.0 {
            self.vel.x = speed;
            bounce.horizontal = true;
        } else if self.right() > playfield.window_width {
            self.vel.x = -speed;
            bounce.horizontal = true;
        }

        if self.top() < 0.0 {
            self.vel.y = speed;
            bounce.vertical = true;
        } else if self.bottom() > playfield.window_height {
            self.vel.y = -speed;
            bounce.vertical = true;
        }

        bounce
    }
}

impl Bounds for Ball {
    fn center(&self) -> Vec2 {
        self.pos
    }

    fn half_extents(&self) -> Vec2 {
        Vec2::splat(self.radius)
    }
}

/// The player's paddle (horizontal movement only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Paddle {
    /// Create a stationary paddle
    pub fn new(pos: Vec2, playfield: &Playfield) -> Self {
        Self {
            pos,
            size: Vec2::new(playfield.paddle_width, playfield.paddle_height),
            vel: Vec2::ZERO,
        }
    }

    /// Move by the current velocity, then pick next frame's velocity
    ///
    /// Left wins over right. A direction is only taken when the full step
    /// keeps the paddle inside `[0, window_width]`, so the paddle can never
    /// leave the window.
    pub fn advance(&mut self, left_pressed: bool, right_pressed: bool, playfield: &Playfield) {
        self.pos += self.vel;

        let speed = playfield.paddle_speed;
        let half = self.half_extents().x;
        // Same arithmetic as the next move, so the check is exact
        self.vel.x = if left_pressed && (self.pos.x - speed) - half >= 0.0 {
            -speed
        } else if right_pressed && (self.pos.x + speed) + half <= playfield.window_width {
            speed
        } else {
            0.0
        };
    }
}

impl Bounds for Paddle {
    fn center(&self) -> Vec2 {
        self.pos
    }

    fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }
}

/// A destructible brick (never moves)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    /// Set once on the frame the ball hits it; removed at the end of that frame
    pub destroyed: bool,
}

impl Brick {
    pub fn new(id: u32, pos: Vec2, playfield: &Playfield) -> Self {
        Self {
            id,
            pos,
            size: Vec2::new(playfield.brick_width, playfield.brick_height),
            destroyed: false,
        }
    }
}

impl Bounds for Brick {
    fn center(&self) -> Vec2 {
        self.pos
    }

    fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }
}

/// Complete simulation state (deterministic, serializable)
///
/// Deserializing goes through the same playfield validation as
/// [`GameState::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SavedState")]
pub struct GameState {
    pub(crate) playfield: Playfield,
    /// Frames simulated so far
    pub frame: u64,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Active bricks, in creation order
    pub bricks: Vec<Brick>,
}

/// Unchecked wire form of [`GameState`]
#[derive(Deserialize)]
struct SavedState {
    playfield: Playfield,
    frame: u64,
    phase: GamePhase,
    ball: Ball,
    paddle: Paddle,
    bricks: Vec<Brick>,
}

impl TryFrom<SavedState> for GameState {
    type Error = ConfigError;

    fn try_from(saved: SavedState) -> Result<Self, Self::Error> {
        saved.playfield.validate()?;
        log::info!(
            "World restored at frame {} ({} bricks)",
            saved.frame,
            saved.bricks.len()
        );
        Ok(Self {
            playfield: saved.playfield,
            frame: saved.frame,
            phase: saved.phase,
            ball: saved.ball,
            paddle: saved.paddle,
            bricks: saved.bricks,
        })
    }
}

impl GameState {
    /// Validate the playfield and lay out the starting world
    pub fn new(playfield: Playfield) -> Result<Self, ConfigError> {
        playfield.validate()?;

        let ball = Ball::new(playfield.ball_start(), &playfield);
        let paddle = Paddle::new(playfield.paddle_start(), &playfield);
        let bricks = build_grid(&playfield);

        log::info!(
            "World created: {}x{} window, {} bricks",
            playfield.window_width,
            playfield.window_height,
            bricks.len()
        );

        Ok(Self {
            playfield,
            frame: 0,
            phase: GamePhase::Running,
            ball,
            paddle,
            bricks,
        })
    }

    /// The constants this world was built from
    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Drop every brick flagged as destroyed, keeping survivor order
    ///
    /// Returns how many were removed.
    pub fn compact_bricks(&mut self) -> usize {
        let before = self.bricks.len();
        self.bricks.retain(|b| !b.destroyed);
        before - self.bricks.len()
    }
}

/// Build the starting brick grid, column by column
pub fn build_grid(playfield: &Playfield) -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(playfield.brick_count());
    let mut next_id = 1;
    for column in 0..playfield.grid_columns {
        for row in 0..playfield.grid_rows {
            if let Some(pos) = playfield.brick_position(column, row) {
                bricks.push(Brick::new(next_id, pos, playfield));
                next_id += 1;
            }
        }
    }
    bricks
}
