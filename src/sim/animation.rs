//! Character animation lookup
//!
//! The character sheet is 7 columns x 4 rows, read left-to-right, top-to-bottom.
//! The simulation only picks a cycle and a frame index; slicing the texture is
//! the renderer's job.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

pub const SHEET_COLS: usize = 7;
pub const SHEET_ROWS: usize = 4;

/// Visual cycle for the character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationCycle {
    Standing,
    WalkRight,
    WalkLeft,
}

impl AnimationCycle {
    /// First and last sheet frames (inclusive)
    pub const fn frames(self) -> (usize, usize) {
        match self {
            AnimationCycle::Standing => (5, 6),
            AnimationCycle::WalkRight => (15, 18),
            AnimationCycle::WalkLeft => (19, 23),
        }
    }

    /// Seconds each frame stays on screen
    pub const fn frame_duration(self) -> f32 {
        match self {
            AnimationCycle::Standing => 0.35,
            AnimationCycle::WalkRight | AnimationCycle::WalkLeft => 0.07,
        }
    }

    pub const fn frame_count(self) -> usize {
        let (first, last) = self.frames();
        last - first + 1
    }

    /// Looping key frame at `state_time`, as an index into the full sheet
    pub fn key_frame(self, state_time: f32) -> usize {
        let (first, _) = self.frames();
        let step = (state_time.max(0.0) / self.frame_duration()) as usize;
        first + step % self.frame_count()
    }
}

/// Cycle for a direction; walking only plays once gated on
pub const fn select_cycle(direction: Direction, walking: bool) -> AnimationCycle {
    match (direction, walking) {
        (Direction::Right, true) => AnimationCycle::WalkRight,
        (Direction::Left, true) => AnimationCycle::WalkLeft,
        _ => AnimationCycle::Standing,
    }
}

/// What the renderer should draw for the character this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRef {
    pub cycle: AnimationCycle,
    /// Index into the character sheet (row-major)
    pub frame: usize,
}

impl FrameRef {
    pub fn new(cycle: AnimationCycle, state_time: f32) -> Self {
        Self {
            cycle,
            frame: cycle.key_frame(state_time),
        }
    }

    /// (row, column) of the frame in the sheet
    pub fn sheet_cell(&self) -> (usize, usize) {
        (self.frame / SHEET_COLS, self.frame % SHEET_COLS)
    }
}
