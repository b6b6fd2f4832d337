//! Input sources
//!
//! The simulation never reads a keyboard itself. Once per frame the driver
//! calls [`InputSource::poll`], which refreshes the source and folds its three
//! boolean queries into a [`TickInput`].

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{GameState, TickInput};

/// Anything that can answer the per-frame key queries
pub trait InputSource {
    /// Refresh internal state; called once per frame before the queries
    fn observe(&mut self, _state: &GameState) {}

    fn is_left_pressed(&self) -> bool;
    fn is_right_pressed(&self) -> bool;
    fn is_stop_requested(&self) -> bool;

    /// Refresh and sample the source for the next frame
    fn poll(&mut self, state: &GameState) -> TickInput {
        self.observe(state);
        TickInput {
            left: self.is_left_pressed(),
            right: self.is_right_pressed(),
            stop: self.is_stop_requested(),
        }
    }
}

/// Plain key flags, set by whoever owns the window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub escape: bool,
}

impl InputSource for KeyState {
    fn is_left_pressed(&self) -> bool {
        self.left
    }

    fn is_right_pressed(&self) -> bool {
        self.right
    }

    fn is_stop_requested(&self) -> bool {
        self.escape
    }
}

/// Replays a fixed list of frames, then asks to stop
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<TickInput>,
    cursor: Option<usize>,
}

impl ScriptedInput {
    pub fn new(frames: Vec<TickInput>) -> Self {
        Self {
            frames,
            cursor: None,
        }
    }

    fn current(&self) -> Option<&TickInput> {
        self.cursor.and_then(|i| self.frames.get(i))
    }
}

impl InputSource for ScriptedInput {
    fn observe(&mut self, _state: &GameState) {
        self.cursor = Some(self.cursor.map_or(0, |i| i + 1));
    }

    fn is_left_pressed(&self) -> bool {
        self.current().is_some_and(|f| f.left)
    }

    fn is_right_pressed(&self) -> bool {
        self.current().is_some_and(|f| f.right)
    }

    fn is_stop_requested(&self) -> bool {
        self.current().is_none_or(|f| f.stop)
    }
}

/// Demo mode: keeps the paddle under the ball
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    left: bool,
    right: bool,
}

impl Autopilot {
    /// Frames of ball travel to lead the target by
    const LEAD_FRAMES: f32 = 4.0;

    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for Autopilot {
    fn observe(&mut self, state: &GameState) {
        let ball = &state.ball;
        let paddle = &state.paddle;
        let target = ball.pos.x + ball.vel.x * Self::LEAD_FRAMES;
        // Deadband avoids jittering around the target
        let deadband = state.playfield().paddle_speed;

        self.left = target < paddle.pos.x - deadband;
        self.right = target > paddle.pos.x + deadband;
    }

    fn is_left_pressed(&self) -> bool {
        self.left
    }

    fn is_right_pressed(&self) -> bool {
        self.right
    }

    fn is_stop_requested(&self) -> bool {
        false
    }
}

/// Which way a random press is held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hold {
    Left,
    Right,
    Idle,
}

/// Seeded random key mashing for soak runs
///
/// Each choice is held for a random number of frames. The same seed always
/// produces the same press sequence.
#[derive(Debug, Clone)]
pub struct RandomInput {
    rng: Pcg32,
    hold: Hold,
    frames_left: u32,
}

impl RandomInput {
    const MIN_HOLD: u32 = 4;
    const MAX_HOLD: u32 = 48;

    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            hold: Hold::Idle,
            frames_left: 0,
        }
    }
}

impl InputSource for RandomInput {
    fn observe(&mut self, _state: &GameState) {
        if self.frames_left == 0 {
            self.hold = match self.rng.random_range(0..3u8) {
                0 => Hold::Left,
                1 => Hold::Right,
                _ => Hold::Idle,
            };
            self.frames_left = self.rng.random_range(Self::MIN_HOLD..=Self::MAX_HOLD);
        }
        self.frames_left -= 1;
    }

    fn is_left_pressed(&self) -> bool {
        self.hold == Hold::Left
    }

    fn is_right_pressed(&self) -> bool {
        self.hold == Hold::Right
    }

    fn is_stop_requested(&self) -> bool {
        false
    }
}
