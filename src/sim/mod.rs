//! Frame-driven simulation module
//!
//! All gameplay logic lives here. Rendering and asset loading are external:
//! the simulation emits animation frame ids and sprite indices only.
//! - One tick per rendered frame, fixed step order
//! - Seeded RNG only
//! - Live objects kept in spawn order

pub mod animation;
pub mod collision;
pub mod direction;
pub mod falling;
pub mod input;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use animation::{AnimationCycle, FrameRef, select_cycle};
pub use collision::Rect;
pub use direction::{Direction, DirectionTracker};
pub use input::InputSmoother;
pub use physics::PhysicsWorld;
pub use spawner::Spawner;
pub use state::{Character, FallingObject, GameEvent, GameState};
pub use tick::{TickInput, tick};
