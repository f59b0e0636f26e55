//! Timer-driven sushi spawner
//!
//! Drops one object per interval at a random x along the top of the
//! playfield. Randomness comes from a seeded PCG so runs replay exactly.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::FallingObject;
use crate::settings::Settings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    rng: Pcg32,
    /// Monotonic time (ns) of the last spawn
    last_spawn: u64,
    interval_nanos: u64,
    x_min: f32,
    x_max: f32,
    spawn_y: f32,
    size: f32,
    sprite_variants: u32,
    max_tier: u8,
}

impl Spawner {
    pub fn new(settings: &Settings, seed: u64, now: u64) -> Self {
        let (x_min, x_max) = settings.spawn_range();
        Self {
            rng: Pcg32::seed_from_u64(seed),
            last_spawn: now,
            interval_nanos: settings.spawn_interval_nanos,
            x_min,
            x_max,
            spawn_y: settings.height,
            size: settings.object_size,
            sprite_variants: settings.sprite_variants.max(1),
            max_tier: settings.max_velocity_tier,
        }
    }

    /// True once strictly more than one interval has passed since the last spawn
    pub fn is_due(&self, now: u64) -> bool {
        now.saturating_sub(self.last_spawn) > self.interval_nanos
    }

    pub fn last_spawn(&self) -> u64 {
        self.last_spawn
    }

    /// Create a new object and reset the timer to `now`
    pub fn spawn(&mut self, id: u32, now: u64) -> FallingObject {
        let x = self.rng.random_range(self.x_min..=self.x_max);
        let sprite_index = self.rng.random_range(0..self.sprite_variants);
        let velocity_tier = self.rng.random_range(0..=self.max_tier);
        self.last_spawn = now;

        FallingObject {
            id,
            rect: Rect::new(x, self.spawn_y, self.size, self.size),
            sprite_index,
            velocity_tier,
        }
    }
}
