//! Tilt input smoothing
//!
//! Raw tilt is noisy; the character follows a moving average of the last few
//! samples, clamped to a speed limit.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Bounded FIFO of recent raw deltas, averaged and clamped on every push
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSmoother {
    window: VecDeque<f32>,
    capacity: usize,
    speed_limit: f32,
}

impl InputSmoother {
    pub fn new(capacity: usize, speed_limit: f32) -> Self {
        Self {
            window: VecDeque::with_capacity(capacity + 1),
            capacity: capacity.max(1),
            speed_limit,
        }
    }

    /// Record a raw delta and return the smoothed, clamped delta
    pub fn smooth(&mut self, raw: f32) -> f32 {
        self.window.push_back(raw);
        if self.window.len() > self.capacity {
            self.window.pop_front();
        }

        let mean = self.window.iter().sum::<f32>() / self.window.len() as f32;
        mean.clamp(-self.speed_limit, self.speed_limit)
    }

    /// Samples currently held (oldest first)
    pub fn samples(&self) -> impl Iterator<Item = f32> + '_ {
        self.window.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn clear(&mut self) {
        self.window.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SMOOTHING_WINDOW, SPEED_LIMIT};
    use proptest::prelude::*;

    #[test]
    fn test_first_sample_passes_through() {
        let mut smoother = InputSmoother::new(SMOOTHING_WINDOW, SPEED_LIMIT);
        assert_eq!(smoother.smooth(2.0), 2.0);
        assert_eq!(smoother.len(), 1);
    }

    #[test]
    fn test_oldest_evicted_first() {
        let mut smoother = InputSmoother::new(SMOOTHING_WINDOW, SPEED_LIMIT);
        for raw in [8.0, 0.0, 0.0, 0.0] {
            smoother.smooth(raw);
        }
        // 8.0 drops out on the fifth sample
        assert_eq!(smoother.smooth(4.0), 1.0);
        assert_eq!(smoother.samples().collect::<Vec<_>>(), vec![0.0, 0.0, 0.0, 4.0]);
    }

    #[test]
    fn test_speed_limit() {
        let mut smoother = InputSmoother::new(SMOOTHING_WINDOW, SPEED_LIMIT);
        assert_eq!(smoother.smooth(100.0), 14.0);
        smoother.clear();
        assert_eq!(smoother.smooth(-100.0), -14.0);
    }

    proptest! {
        #[test]
        fn prop_window_bounded_and_mean(raws in prop::collection::vec(-50.0f32..50.0, 1..64)) {
            let mut smoother = InputSmoother::new(SMOOTHING_WINDOW, SPEED_LIMIT);
            for (i, &raw) in raws.iter().enumerate() {
                let out = smoother.smooth(raw);
                prop_assert!(smoother.len() <= SMOOTHING_WINDOW);

                let start = (i + 1).saturating_sub(SMOOTHING_WINDOW);
                let recent = &raws[start..=i];
                let expected = (recent.iter().sum::<f32>() / recent.len() as f32)
                    .clamp(-SPEED_LIMIT, SPEED_LIMIT);
                prop_assert!((out - expected).abs() < 1e-3);
            }
        }
    }
}
