//! Direction state machine
//!
//! Derives a discrete Left/Right/Still state from the smoothed delta. The
//! thresholds leave a hysteresis gap: |d| > 1 turns, |d| < 0.5 stops, and
//! anything in between keeps the current state.

use serde::{Deserialize, Serialize};

use super::animation::{AnimationCycle, select_cycle};
use crate::nanos_to_millis;
use crate::settings::DirectionTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    #[default]
    Still,
}

/// Current direction plus the monotonic time (ns) each state was last entered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionTracker {
    current: Direction,
    previous: Direction,
    right_since: u64,
    left_since: u64,
    still_since: u64,
    tuning: DirectionTuning,
}

impl DirectionTracker {
    /// Start in `Still`, entered at `now`
    pub fn new(tuning: DirectionTuning, now: u64) -> Self {
        Self {
            current: Direction::Still,
            previous: Direction::Still,
            right_since: 0,
            left_since: 0,
            still_since: now,
            tuning,
        }
    }

    pub fn current(&self) -> Direction {
        self.current
    }

    pub fn previous(&self) -> Direction {
        self.previous
    }

    /// Time (ns) the given state was last entered
    pub fn entered_at(&self, direction: Direction) -> u64 {
        match direction {
            Direction::Left => self.left_since,
            Direction::Right => self.right_since,
            Direction::Still => self.still_since,
        }
    }

    /// Whole milliseconds spent since `direction` was last entered
    pub fn millis_since_entry(&self, direction: Direction, now: u64) -> u64 {
        nanos_to_millis(self.entered_at(direction), now)
    }

    /// Apply one smoothed delta; returns the (possibly new) current direction
    pub fn update(&mut self, delta: f32, now: u64) -> Direction {
        let turn = self.tuning.turn_threshold;
        let band = self.tuning.still_band;

        if delta > turn && self.current != Direction::Right {
            self.right_since = now;
            self.current = Direction::Right;
        } else if delta < -turn && self.current != Direction::Left {
            self.left_since = now;
            self.previous = self.current;
            self.current = Direction::Left;
        } else if delta < band && delta > -band && self.current != Direction::Still {
            self.still_since = now;
            self.previous = self.current;
            self.current = Direction::Still;
        }

        self.current
    }

    /// Whether a strong, sustained tilt has engaged the walk cycle
    pub fn is_walking(&self, delta: f32, now: u64) -> bool {
        let threshold = self.tuning.walk_threshold;
        match self.current {
            Direction::Right => {
                delta * (self.millis_since_entry(Direction::Right, now) as f32) > threshold
            }
            Direction::Left => {
                delta * (self.millis_since_entry(Direction::Left, now) as f32) < -threshold
            }
            Direction::Still => false,
        }
    }

    /// Animation cycle for this frame
    pub fn animation(&self, delta: f32, now: u64) -> AnimationCycle {
        select_cycle(self.current, self.is_walking(delta, now))
    }
}
