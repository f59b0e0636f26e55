//! Game state and core simulation types
//!
//! Everything the tick mutates lives here, owned by one `GameState`. The
//! physics world is kept separately (see `physics`) since it holds engine
//! handles rather than plain data.

use serde::{Deserialize, Serialize};

use super::animation::{AnimationCycle, FrameRef};
use super::collision::Rect;
use super::direction::{Direction, DirectionTracker};
use super::input::InputSmoother;
use super::spawner::Spawner;
use crate::settings::Settings;

/// The player-controlled hamster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub rect: Rect,
}

impl Character {
    pub fn new(settings: &Settings) -> Self {
        Self {
            rect: Rect::new(
                settings.character_start_x(),
                settings.character_start_y,
                settings.character_width,
                settings.character_height,
            ),
        }
    }

    /// Move horizontally by `delta`, clamped to `[0, max_x]`
    pub fn apply_motion(&mut self, delta: f32, max_x: f32) {
        self.rect.x += delta;
        if self.rect.x < 0.0 {
            self.rect.x = 0.0;
        }
        if self.rect.x > max_x {
            self.rect.x = max_x;
        }
    }
}

/// A falling sushi
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingObject {
    pub id: u32,
    pub rect: Rect,
    /// Cell in the sushi sheet; opaque to the simulation
    pub sprite_index: u32,
    /// 0..=4, each tier adds to fall speed
    pub velocity_tier: u8,
}

/// Observable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ObjectSpawned {
        id: u32,
        x: f32,
        sprite_index: u32,
        velocity_tier: u8,
    },
    /// Object overlapped the character and was removed
    ObjectCaught { id: u32, sprite_index: u32 },
    /// Object fell past the bottom and was removed
    ObjectLanded { id: u32 },
    DirectionChanged { from: Direction, to: Direction },
}

/// Complete simulation state (excluding the physics world)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub settings: Settings,
    /// Run seed for reproducibility
    pub seed: u64,
    pub character: Character,
    /// Live objects in spawn order
    pub objects: Vec<FallingObject>,
    pub smoother: InputSmoother,
    pub direction: DirectionTracker,
    pub spawner: Spawner,
    /// Accumulated simulation time (seconds); drives animation and difficulty
    pub state_time: f32,
    /// Frames simulated so far
    pub time_ticks: u64,
    /// Frame selected by the last tick
    pub frame: FrameRef,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new game at monotonic time `now` (ns); drops the first sushi immediately
    pub fn new(settings: Settings, seed: u64, now: u64) -> Self {
        let mut state = Self {
            character: Character::new(&settings),
            objects: Vec::new(),
            smoother: InputSmoother::new(settings.smoothing_window, settings.speed_limit),
            direction: DirectionTracker::new(settings.direction, now),
            spawner: Spawner::new(&settings, seed, now),
            state_time: 0.0,
            time_ticks: 0,
            frame: FrameRef::new(AnimationCycle::Standing, 0.0),
            events: Vec::new(),
            next_id: 1,
            settings,
            seed,
        };

        state.spawn_object(now);

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one object at the top of the playfield and reset the spawn timer
    pub fn spawn_object(&mut self, now: u64) {
        let id = self.next_entity_id();
        let object = self.spawner.spawn(id, now);
        log::debug!(
            "Spawned sushi {} at x={:.1} (sprite {}, tier {})",
            object.id,
            object.rect.x,
            object.sprite_index,
            object.velocity_tier
        );
        self.events.push(GameEvent::ObjectSpawned {
            id: object.id,
            x: object.rect.x,
            sprite_index: object.sprite_index,
            velocity_tier: object.velocity_tier,
        });
        self.objects.push(object);
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
