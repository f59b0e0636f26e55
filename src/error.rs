//! Startup errors
//!
//! The simulation loop itself is total; anything that can go wrong happens
//! while loading or validating settings, and is fatal at startup.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("playfield must be positive and finite, got {width}x{height}")]
    InvalidPlayfield { width: f32, height: f32 },
    #[error("character {width}x{height} does not fit in a {field_width}x{field_height} playfield")]
    CharacterTooLarge {
        width: f32,
        height: f32,
        field_width: f32,
        field_height: f32,
    },
    #[error("spawn range [{min}, {max}] is empty")]
    EmptySpawnRange { min: f32, max: f32 },
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
}
