//! Sushi Drop headless driver
//!
//! Runs the simulation loop at 60 Hz with a synthetic gyroscope signal and
//! logs what happens. Usage:
//!
//! ```text
//! sushi-drop [settings.json] [ticks] [seed]
//! ```
//!
//! Set `RUST_LOG=debug` to see individual spawns and catches.

use std::path::Path;
use std::process::ExitCode;

use sushi_drop::consts::FRAME_DT;
use sushi_drop::sim::{GameEvent, GameState, PhysicsWorld, TickInput, tick};
use sushi_drop::Settings;

const DEFAULT_TICKS: u64 = 60 * 30;
const FRAME_NANOS: u64 = 16_666_667;

/// Gentle side-to-side tilt, with the sensor dropping out now and then
fn synthetic_gyro(frame: u64) -> Option<f32> {
    if frame % 600 >= 570 {
        return None;
    }
    let t = frame as f32 * FRAME_DT;
    Some((t * 0.7).sin() * 1.2 + (t * 3.1).sin() * 0.15)
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Sushi Drop (headless) starting...");

    let mut args = std::env::args().skip(1);

    let settings = match args.next().filter(|a| a != "-") {
        Some(path) => match Settings::load_from_path(Path::new(&path)) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };
    if let Err(e) = settings.validate() {
        log::error!("Invalid settings: {e}");
        return ExitCode::FAILURE;
    }

    let ticks = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(DEFAULT_TICKS);
    let seed = args.next().and_then(|a| a.parse().ok()).unwrap_or(12345);

    let tilt_gain = settings.tilt_gain;
    let mut physics = PhysicsWorld::new(&settings);
    let mut state = GameState::new(settings, seed, 0);
    log::info!("Game initialized with seed: {}", seed);

    let (mut spawned, mut caught, mut landed) = (0u32, 0u32, 0u32);
    for frame in 1..=ticks {
        let input = TickInput::from_gyro(
            FRAME_DT,
            frame * FRAME_NANOS,
            synthetic_gyro(frame),
            tilt_gain,
        );
        tick(&mut state, &mut physics, &input);

        for event in state.drain_events() {
            match event {
                GameEvent::ObjectSpawned { .. } => spawned += 1,
                GameEvent::ObjectCaught { .. } => caught += 1,
                GameEvent::ObjectLanded { .. } => landed += 1,
                GameEvent::DirectionChanged { from, to } => {
                    log::info!("Frame {frame}: {from:?} -> {to:?}");
                }
            }
        }
    }

    log::info!(
        "Ran {} ticks ({:.1}s): {} spawned, {} caught, {} landed, {} still falling, x={:.1}",
        state.time_ticks,
        state.state_time,
        spawned,
        caught,
        landed,
        state.objects.len(),
        state.character.rect.x
    );

    ExitCode::SUCCESS
}
