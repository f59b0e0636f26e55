//! Sushi Drop - a tilt-controlled falling-food arcade game
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (input smoothing, direction, spawning, physics)
//! - `settings`: Data-driven tuning and playfield configuration
//! - `error`: Startup/configuration errors

pub mod error;
pub mod settings;
pub mod sim;

pub use error::SettingsError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const WIDTH: f32 = 480.0;
    pub const HEIGHT: f32 = 800.0;

    /// Reference frame rate used by tests and the headless driver
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Character (hamster) defaults
    pub const CHARACTER_WIDTH: f32 = 80.0;
    pub const CHARACTER_HEIGHT: f32 = 80.0;
    pub const CHARACTER_START_Y: f32 = 40.0;
    /// Gap kept between the character and the right edge (480 - 80 - 40 = 360)
    pub const CHARACTER_RIGHT_MARGIN: f32 = 40.0;

    /// Tilt input
    pub const TILT_GAIN: f32 = 5.0;
    pub const SPEED_LIMIT: f32 = 14.0;
    pub const SMOOTHING_WINDOW: usize = 4;

    /// Falling objects
    pub const OBJECT_SIZE: f32 = 40.0;
    pub const SPAWN_INTERVAL_NANOS: u64 = 1_000_000_000;
    pub const SPAWN_MARGIN_LEFT: f32 = 30.0;
    pub const SPAWN_MARGIN_RIGHT: f32 = 94.0;
    /// Sushi sheet is 9 rows x 15 columns
    pub const SPRITE_VARIANTS: u32 = 9 * 15;
    pub const MAX_VELOCITY_TIER: u8 = 4;
    pub const BASE_FALL_SPEED: f32 = 160.0;
    pub const TIER_FALL_SPEED: f32 = 20.0;
    pub const LANDING_Y: f32 = 25.0;

    /// Physics world
    pub const GRAVITY_Y: f32 = -75.0;
    pub const VELOCITY_ITERATIONS: usize = 7;
    pub const POSITION_ITERATIONS: usize = 6;
}

/// Convert a monotonic nanosecond span to whole milliseconds (saturating at zero)
#[inline]
pub fn nanos_to_millis(since: u64, now: u64) -> u64 {
    now.saturating_sub(since) / 1_000_000
}
