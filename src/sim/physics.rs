//! Physics world adapter
//!
//! Wraps a rapier2d world holding a static ground body and a dynamic
//! character body. The world is stepped once per frame; gameplay overlap does
//! not depend on it. All engine state is released when the adapter drops.

use std::num::NonZeroUsize;

use glam::Vec2;
use rapier2d::prelude::*;

use crate::settings::Settings;

/// Ground box half-extents (twice the viewport wide, 20 high)
const GROUND_HALF_EXTENTS: (f32, f32) = (800.0, 10.0);
const CHARACTER_DENSITY: f32 = 1.0;
const CHARACTER_RESTITUTION: f32 = 0.6;

pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,

    ground: RigidBodyHandle,
    character: RigidBodyHandle,
    /// Sensor fixture on the character, only present when enabled in settings
    character_fixture: Option<ColliderHandle>,
    steps: u64,
}

impl PhysicsWorld {
    /// Build the world with ground and character bodies
    pub fn new(settings: &Settings) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.num_solver_iterations =
            NonZeroUsize::new(settings.velocity_iterations).unwrap_or(NonZeroUsize::MIN);
        integration_parameters.num_internal_pgs_iterations = settings.position_iterations;

        let mut rigid_body_set = RigidBodySet::new();
        let mut collider_set = ColliderSet::new();

        // Ground: static box centered horizontally on y = 0
        let ground = rigid_body_set.insert(
            RigidBodyBuilder::fixed()
                .translation(vector![settings.width / 2.0, 0.0])
                .build(),
        );
        collider_set.insert_with_parent(
            ColliderBuilder::cuboid(GROUND_HALF_EXTENTS.0, GROUND_HALF_EXTENTS.1)
                .density(0.0)
                .build(),
            ground,
            &mut rigid_body_set,
        );

        // Character: dynamic body at the sprite's starting corner
        let character = rigid_body_set.insert(
            RigidBodyBuilder::dynamic()
                .translation(vector![
                    settings.character_start_x(),
                    settings.character_start_y
                ])
                .build(),
        );

        let character_fixture = if settings.attach_character_fixture {
            let fixture = ColliderBuilder::cuboid(
                settings.character_width / 2.0,
                settings.character_height / 2.0,
            )
            .density(CHARACTER_DENSITY)
            .restitution(CHARACTER_RESTITUTION)
            .sensor(true)
            .build();
            Some(collider_set.insert_with_parent(fixture, character, &mut rigid_body_set))
        } else {
            None
        };

        log::info!(
            "Physics world created: gravity=(0, {}), iterations=({}, {}), character fixture {}",
            settings.gravity_y,
            settings.velocity_iterations,
            settings.position_iterations,
            if character_fixture.is_some() { "attached" } else { "detached" }
        );

        Self {
            gravity: vector![0.0, settings.gravity_y],
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            rigid_body_set,
            collider_set,
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            ground,
            character,
            character_fixture,
            steps: 0,
        }
    }

    /// Advance the world by `dt` seconds; non-positive or non-finite steps are ignored
    pub fn step(&mut self, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) {
            log::warn!("Skipping physics step with dt={}", dt);
            return;
        }

        self.integration_parameters.dt = dt;
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
        self.steps += 1;
        log::trace!("Physics step {} (dt={:.4})", self.steps, dt);
    }

    /// Number of successful steps so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn gravity(&self) -> Vec2 {
        Vec2::new(self.gravity.x, self.gravity.y)
    }

    fn body_position(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.rigid_body_set.get(handle).map(|body| {
            let pos = body.translation();
            Vec2::new(pos.x, pos.y)
        })
    }

    pub fn ground_position(&self) -> Option<Vec2> {
        self.body_position(self.ground)
    }

    pub fn character_position(&self) -> Option<Vec2> {
        self.body_position(self.character)
    }

    pub fn has_character_fixture(&self) -> bool {
        self.character_fixture.is_some()
    }

    pub fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }

    pub fn collider_count(&self) -> usize {
        self.collider_set.len()
    }
}

impl Drop for PhysicsWorld {
    fn drop(&mut self) {
        log::info!(
            "Releasing physics world ({} bodies, {} colliders, {} steps)",
            self.rigid_body_set.len(),
            self.collider_set.len(),
            self.steps
        );
    }
}
