//! Test utilities for headless Bevy integration tests.
//!
//! Provides `TestApp`, a wrapper around `bevy::app::App` that uses
//! `MinimalPlugins` + `NavAgentSyncPlugin` for testing whole ticks
//! without a rendering or windowing backend.

use std::time::Duration;

use bevy::ecs::system::ScheduleSystem;
use bevy::prelude::*;
use bevy::tasks::{ComputeTaskPool, TaskPool};

use crate::bevy::plugin::{NavAgentSet, NavAgentSyncPlugin};
use crate::config::NavAgentSyncConfig;

/// Fixed tick length used by tests.
pub const TEST_DT: Duration = Duration::from_millis(16);

/// Makes sure the compute pool exists for systems that use `par_iter_mut`
/// when running against a bare `World`.
pub fn init_task_pool() {
    ComputeTaskPool::get_or_init(TaskPool::default);
}

/// A headless Bevy app wrapper for testing.
pub(crate) struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Create a new test app with every pass enabled.
    pub fn new() -> Self {
        Self::with_config(NavAgentSyncConfig::all())
    }

    /// Create a new test app with a specific sync config.
    pub fn with_config(config: NavAgentSyncConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(Time::<Fixed>::from_duration(TEST_DT));
        app.add_plugins(NavAgentSyncPlugin::new(FixedUpdate).with_config(config));
        // Pause virtual time so that only explicit tick() calls advance
        // the fixed schedule.
        app.world_mut().resource_mut::<Time<Virtual>>().pause();
        // Run one update to initialize all resources
        app.update();
        Self { app }
    }

    /// Register a system as the host's agent-update step.
    pub fn add_agent_update<M>(&mut self, system: impl IntoScheduleConfigs<ScheduleSystem, M>) {
        self.app.add_systems(
            FixedUpdate,
            system.in_set(NavAgentSet::AgentUpdate),
        );
    }

    /// Run exactly `n` fixed ticks.
    ///
    /// Feeds time straight into the fixed-timestep accumulator, bypassing
    /// (paused) virtual time, so each call runs `FixedUpdate` exactly once.
    pub fn tick(&mut self, n: usize) {
        for _ in 0..n {
            self.app
                .world_mut()
                .resource_mut::<Time<Fixed>>()
                .accumulate_overstep(TEST_DT);
            self.app.update();
        }
    }

    /// Spawn an entity with the given components.
    pub fn spawn(&mut self, bundle: impl Bundle) -> Entity {
        self.app.world_mut().spawn(bundle).id()
    }

    /// Copy a component value out of an entity.
    pub fn get<C: Component + Copy>(&self, entity: Entity) -> C {
        *self
            .app
            .world()
            .get::<C>(entity)
            .expect("entity is missing the requested component")
    }

    /// Get a reference to the World.
    pub fn world(&self) -> &World {
        self.app.world()
    }

    /// Get a mutable reference to the World.
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
