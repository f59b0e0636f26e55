//! Game settings and tuning
//!
//! Every gameplay constant lives here so a build can be retuned from a JSON
//! file without touching the simulation. `Settings::default()` reproduces the
//! reference game.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Thresholds driving the direction state machine and walk-cycle gating
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionTuning {
    /// Magnitude above which the character turns Left/Right
    pub turn_threshold: f32,
    /// Half-width of the open band that returns the character to Still
    pub still_band: f32,
    /// `delta * ms_since_entry` must exceed this before the walk cycle plays
    pub walk_threshold: f32,
}

impl Default for DirectionTuning {
    fn default() -> Self {
        Self {
            turn_threshold: 1.0,
            still_band: 0.5,
            walk_threshold: 900.0,
        }
    }
}

/// Game settings/tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub width: f32,
    pub height: f32,

    // === Character ===
    pub character_width: f32,
    pub character_height: f32,
    pub character_start_y: f32,
    /// Gap kept between the character's right edge and the playfield edge
    pub right_margin: f32,

    // === Input ===
    /// Multiplier from gyroscope rate to raw horizontal delta
    pub tilt_gain: f32,
    /// Smoothed delta is clamped to [-speed_limit, speed_limit]
    pub speed_limit: f32,
    /// Number of raw samples averaged
    pub smoothing_window: usize,
    pub direction: DirectionTuning,

    // === Falling objects ===
    pub spawn_interval_nanos: u64,
    pub spawn_margin_left: f32,
    pub spawn_margin_right: f32,
    pub object_size: f32,
    pub sprite_variants: u32,
    pub max_velocity_tier: u8,
    pub base_fall_speed: f32,
    pub tier_fall_speed: f32,
    /// Objects below this y are considered landed
    pub landing_y: f32,

    // === Physics ===
    pub gravity_y: f32,
    pub velocity_iterations: usize,
    pub position_iterations: usize,
    /// Attach the sensor fixture to the character body (off in the reference game)
    pub attach_character_fixture: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,

            character_width: CHARACTER_WIDTH,
            character_height: CHARACTER_HEIGHT,
            character_start_y: CHARACTER_START_Y,
            right_margin: CHARACTER_RIGHT_MARGIN,

            tilt_gain: TILT_GAIN,
            speed_limit: SPEED_LIMIT,
            smoothing_window: SMOOTHING_WINDOW,
            direction: DirectionTuning::default(),

            spawn_interval_nanos: SPAWN_INTERVAL_NANOS,
            spawn_margin_left: SPAWN_MARGIN_LEFT,
            spawn_margin_right: SPAWN_MARGIN_RIGHT,
            object_size: OBJECT_SIZE,
            sprite_variants: SPRITE_VARIANTS,
            max_velocity_tier: MAX_VELOCITY_TIER,
            base_fall_speed: BASE_FALL_SPEED,
            tier_fall_speed: TIER_FALL_SPEED,
            landing_y: LANDING_Y,

            gravity_y: GRAVITY_Y,
            velocity_iterations: VELOCITY_ITERATIONS,
            position_iterations: POSITION_ITERATIONS,
            attach_character_fixture: false,
        }
    }
}

impl Settings {
    /// Rightmost x the character may occupy
    pub fn max_character_x(&self) -> f32 {
        self.width - self.character_width - self.right_margin
    }

    /// Starting x (character centered horizontally)
    pub fn character_start_x(&self) -> f32 {
        self.width / 2.0 - self.character_width / 2.0
    }

    /// Inclusive horizontal spawn range
    pub fn spawn_range(&self) -> (f32, f32) {
        (self.spawn_margin_left, self.width - self.spawn_margin_right)
    }

    /// Reject configurations the simulation can't run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;

        if !positive(self.width) || !positive(self.height) {
            return Err(SettingsError::InvalidPlayfield {
                width: self.width,
                height: self.height,
            });
        }
        if !positive(self.character_width)
            || !positive(self.character_height)
            || self.max_character_x() < 0.0
            || self.character_height > self.height
        {
            return Err(SettingsError::CharacterTooLarge {
                width: self.character_width,
                height: self.character_height,
                field_width: self.width,
                field_height: self.height,
            });
        }
        let (min, max) = self.spawn_range();
        if min.is_nan() || max.is_nan() || min > max {
            return Err(SettingsError::EmptySpawnRange { min, max });
        }
        if self.smoothing_window == 0 {
            return Err(SettingsError::NotPositive("smoothing_window"));
        }
        if !positive(self.speed_limit) {
            return Err(SettingsError::NotPositive("speed_limit"));
        }
        if self.sprite_variants == 0 {
            return Err(SettingsError::NotPositive("sprite_variants"));
        }
        if !positive(self.object_size) {
            return Err(SettingsError::NotPositive("object_size"));
        }
        if self.velocity_iterations == 0 {
            return Err(SettingsError::NotPositive("velocity_iterations"));
        }
        Ok(())
    }

    /// Parse settings from JSON text (missing fields fall back to defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load and validate settings from a JSON file
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
