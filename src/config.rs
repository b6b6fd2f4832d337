//! Playfield configuration
//!
//! Every constant the simulation depends on lives in [`Playfield`]. It is built
//! once (defaults or a JSON file), validated once, then only ever borrowed.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How a brick hit decides whether the ball came from above or below
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalSideRule {
    /// Smaller of `|overlap_top|` and `|overlap_bottom|` wins, like the
    /// horizontal rule
    #[default]
    Compare,
    /// Every vertical hit is treated as coming from below (ball sent downward)
    AlwaysBelow,
}

/// Immutable playfield constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playfield {
    pub window_width: f32,
    pub window_height: f32,

    pub ball_radius: f32,
    pub ball_speed: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_bottom_offset: f32,

    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_gap: f32,
    pub grid_offset_x: f32,
    pub grid_columns: u32,
    pub grid_rows: u32,

    pub vertical_side_rule: VerticalSideRule,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,

            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_gap: BRICK_GAP,
            grid_offset_x: GRID_OFFSET_X,
            grid_columns: GRID_COLUMNS,
            grid_rows: GRID_ROWS,

            vertical_side_rule: VerticalSideRule::Compare,
        }
    }
}

/// Configuration rejected at startup
#[derive(Debug)]
pub enum ConfigError {
    /// A size that must be strictly positive is not
    NonPositiveDimension { field: &'static str, value: f32 },
    /// A speed that must be strictly positive is not
    NonPositiveSpeed { field: &'static str, value: f32 },
    /// The brick grid would hold no bricks
    EmptyGrid { columns: u32, rows: u32 },
    /// The paddle cannot fit between the side walls
    PaddleTooWide { paddle_width: f32, window_width: f32 },
    /// The paddle row lies outside the window
    PaddleOutsideWindow { paddle_y: f32, window_height: f32 },
    /// Reading the configuration file failed
    Io(std::io::Error),
    /// The configuration file is not valid JSON for [`Playfield`]
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveDimension { field, value } => {
                write!(f, "{} must be positive (got {})", field, value)
            }
            ConfigError::NonPositiveSpeed { field, value } => {
                write!(f, "{} must be positive (got {})", field, value)
            }
            ConfigError::EmptyGrid { columns, rows } => {
                write!(f, "brick grid {}x{} contains no bricks", columns, rows)
            }
            ConfigError::PaddleTooWide {
                paddle_width,
                window_width,
            } => write!(
                f,
                "paddle width {} does not fit in window width {}",
                paddle_width, window_width
            ),
            ConfigError::PaddleOutsideWindow {
                paddle_y,
                window_height,
            } => write!(
                f,
                "paddle row y={} lies outside window height {}",
                paddle_y, window_height
            ),
            ConfigError::Io(e) => write!(f, "failed to read config: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl Playfield {
    /// Parse a playfield from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a playfield from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let playfield = Self::from_json(&json)?;
        log::info!("Loaded playfield config from {}", path.display());
        Ok(playfield)
    }

    /// Check startup preconditions
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dimensions = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("ball_radius", self.ball_radius),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        // `!(v > 0.0)` also rejects NaN
        if let Some(&(field, value)) = dimensions.iter().find(|(_, v)| !(*v > 0.0)) {
            return Err(ConfigError::NonPositiveDimension { field, value });
        }

        let speeds = [
            ("ball_speed", self.ball_speed),
            ("paddle_speed", self.paddle_speed),
        ];
        if let Some(&(field, value)) = speeds.iter().find(|(_, v)| !(*v > 0.0)) {
            return Err(ConfigError::NonPositiveSpeed { field, value });
        }

        if self.brick_count() == 0 {
            return Err(ConfigError::EmptyGrid {
                columns: self.grid_columns,
                rows: self.grid_rows,
            });
        }

        if self.paddle_width > self.window_width {
            return Err(ConfigError::PaddleTooWide {
                paddle_width: self.paddle_width,
                window_width: self.window_width,
            });
        }

        let paddle_y = self.paddle_start().y;
        if paddle_y < 0.0 || paddle_y > self.window_height {
            return Err(ConfigError::PaddleOutsideWindow {
                paddle_y,
                window_height: self.window_height,
            });
        }

        if let Some(last) = self.brick_position(self.grid_columns - 1, self.grid_rows - 1) {
            let right = last.x + self.brick_width / 2.0;
            let bottom = last.y + self.brick_height / 2.0;
            if right > self.window_width || bottom > self.window_height {
                log::warn!(
                    "Brick grid extends outside the window (right={}, bottom={})",
                    right,
                    bottom
                );
            }
        }

        Ok(())
    }

    /// Total number of bricks in the starting grid
    pub fn brick_count(&self) -> usize {
        self.grid_columns as usize * self.grid_rows as usize
    }

    /// Ball spawn point (window center)
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(self.window_width / 2.0, self.window_height / 2.0)
    }

    /// Paddle spawn point (horizontally centered, near the bottom edge)
    pub fn paddle_start(&self) -> Vec2 {
        Vec2::new(
            self.window_width / 2.0,
            self.window_height - self.paddle_bottom_offset,
        )
    }

    /// Center of the brick at `(column, row)`, or `None` outside the grid
    pub fn brick_position(&self, column: u32, row: u32) -> Option<Vec2> {
        if column >= self.grid_columns || row >= self.grid_rows {
            return None;
        }
        let x = (column + 1) as f32 * (self.brick_width + self.brick_gap) + self.grid_offset_x;
        let y = (row + 2) as f32 * (self.brick_height + self.brick_gap);
        Some(Vec2::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let playfield = Playfield::default();
        assert!(playfield.validate().is_ok());
        assert_eq!(playfield.brick_count(), 44);
    }

    #[test]
    fn test_brick_layout() {
        let playfield = Playfield::default();
        assert_eq!(playfield.brick_position(0, 0), Some(Vec2::new(85.0, 46.0)));
        assert_eq!(playfield.brick_position(10, 3), Some(Vec2::new(715.0, 115.0)));
        assert_eq!(playfield.brick_position(11, 0), None);
        assert_eq!(playfield.brick_position(0, 4), None);
    }

    #[test]
    fn test_spawn_points() {
        let playfield = Playfield::default();
        assert_eq!(playfield.ball_start(), Vec2::new(400.0, 300.0));
        assert_eq!(playfield.paddle_start(), Vec2::new(400.0, 550.0));
    }

    #[test]
    fn test_rejects_zero_speed() {
        let playfield = Playfield {
            ball_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            playfield.validate(),
            Err(ConfigError::NonPositiveSpeed { field: "ball_speed", .. })
        ));

        let playfield = Playfield {
            paddle_speed: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            playfield.validate(),
            Err(ConfigError::NonPositiveSpeed { field: "paddle_speed", .. })
        ));
    }

    #[test]
    fn test_rejects_nan_dimension() {
        let playfield = Playfield {
            ball_radius: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            playfield.validate(),
            Err(ConfigError::NonPositiveDimension { field: "ball_radius", .. })
        ));
    }

    #[test]
    fn test_rejects_empty_grid() {
        let playfield = Playfield {
            grid_rows: 0,
            ..Default::default()
        };
        assert!(matches!(
            playfield.validate(),
            Err(ConfigError::EmptyGrid { columns: 11, rows: 0 })
        ));
    }

    #[test]
    fn test_rejects_oversized_paddle() {
        let playfield = Playfield {
            paddle_width: 900.0,
            ..Default::default()
        };
        assert!(matches!(
            playfield.validate(),
            Err(ConfigError::PaddleTooWide { .. })
        ));
    }

    #[test]
    fn test_rejects_paddle_below_window() {
        let playfield = Playfield {
            paddle_bottom_offset: -10.0,
            ..Default::default()
        };
        assert!(matches!(
            playfield.validate(),
            Err(ConfigError::PaddleOutsideWindow { .. })
        ));
    }

    #[test]
    fn test_from_json_partial() {
        let playfield =
            Playfield::from_json(r#"{ "ball_speed": 4.0, "vertical_side_rule": "always_below" }"#)
                .unwrap();
        assert_eq!(playfield.ball_speed, 4.0);
        assert_eq!(playfield.vertical_side_rule, VerticalSideRule::AlwaysBelow);
        assert_eq!(playfield.window_width, WINDOW_WIDTH);
        assert_eq!(playfield.grid_columns, GRID_COLUMNS);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = Playfield::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse config"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Playfield::load("/definitely/not/here/playfield.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
