//! Bevy plugin for the sync layer.
//!
//! Provides:
//! - `NavAgentSet`: the three ordered stages of a tick (inbound sync, the
//!   host's agent update, outbound sync)
//! - `NavAgentSyncPlugin`: registers the opted-in passes into those stages

use bevy::ecs::schedule::{InternedScheduleLabel, ScheduleLabel};
use bevy::prelude::*;

use crate::bevy::events::SyncMarkerConflict;
use crate::bevy::resources::SyncConfigRes;
use crate::bevy::systems;
use crate::config::{MarkerConflictPolicy, NavAgentSyncConfig, SyncPass, SyncPasses};

// ============================================================================
// System Sets
// ============================================================================

/// Ordered stages of one simulation tick, configured as a chain:
/// `SyncIn` → `AgentUpdate` → `SyncOut`.
///
/// Hosts put their path-following / steering systems in `AgentUpdate`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAgentSet {
    /// External `Position`/`Rotation` → agent pose.
    SyncIn,
    /// The host's agent movement step.
    AgentUpdate,
    /// Agent pose → external `Position`/`Rotation`/`LocalToWorld`.
    SyncOut,
}

/// Run condition: true while `pass` is enabled in [`SyncConfigRes`].
pub fn pass_enabled(pass: SyncPass) -> impl FnMut(Res<SyncConfigRes>) -> bool + Clone {
    move |config: Res<SyncConfigRes>| config.is_enabled(pass)
}

/// Comma-separated names of the enabled passes, in registration order.
fn pass_names(passes: &SyncPasses) -> String {
    passes
        .enabled()
        .map(|pass| pass.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Plugin
// ============================================================================

/// Registers the sync passes enabled in its config.
///
/// Passes disabled at build time are never added to the schedule, so turning
/// them on later through [`SyncConfigRes`] has no effect. Registered passes
/// can be switched off and on again at runtime.
pub struct NavAgentSyncPlugin {
    pub schedule: InternedScheduleLabel,
    pub config: NavAgentSyncConfig,
}

impl NavAgentSyncPlugin {
    /// Targets `schedule` with no passes enabled; opt in through
    /// [`NavAgentSyncPlugin::with_config`].
    pub fn new(schedule: impl ScheduleLabel) -> Self {
        Self {
            schedule: schedule.intern(),
            config: NavAgentSyncConfig::default(),
        }
    }

    pub fn with_config(mut self, config: NavAgentSyncConfig) -> Self {
        self.config = config;
        self
    }
}

impl Default for NavAgentSyncPlugin {
    fn default() -> Self {
        Self::new(FixedUpdate)
    }
}

impl Plugin for NavAgentSyncPlugin {
    fn build(&self, app: &mut App) {
        let schedule = self.schedule;

        app.insert_resource(SyncConfigRes::new(self.config.clone()));
        app.add_message::<SyncMarkerConflict>();

        app.configure_sets(
            schedule,
            (
                NavAgentSet::SyncIn,
                NavAgentSet::AgentUpdate,
                NavAgentSet::SyncOut,
            )
                .chain(),
        );

        for pass in self.config.passes.enabled() {
            let set = if pass.is_inbound() {
                NavAgentSet::SyncIn
            } else {
                NavAgentSet::SyncOut
            };
            let gate = pass_enabled(pass);

            match pass {
                SyncPass::PoseToMatrix => app.add_systems(
                    schedule,
                    systems::sync_pose_to_matrix.in_set(set).run_if(gate),
                ),
                SyncPass::PositionIn => app.add_systems(
                    schedule,
                    systems::sync_position_to_agent.in_set(set).run_if(gate),
                ),
                SyncPass::PositionOut => app.add_systems(
                    schedule,
                    systems::sync_position_from_agent.in_set(set).run_if(gate),
                ),
                SyncPass::RotationIn => app.add_systems(
                    schedule,
                    systems::sync_rotation_to_agent.in_set(set).run_if(gate),
                ),
                SyncPass::RotationOut => app.add_systems(
                    schedule,
                    systems::sync_rotation_from_agent.in_set(set).run_if(gate),
                ),
            };
            tracing::debug!("[navsync] registered {pass} in {set:?}");
        }

        if self.config.conflict_policy == MarkerConflictPolicy::Warn {
            let passes = &self.config.passes;
            if passes.is_enabled(SyncPass::PositionIn) && passes.is_enabled(SyncPass::PositionOut) {
                app.add_systems(
                    schedule,
                    systems::detect_position_marker_conflicts.in_set(NavAgentSet::SyncIn),
                );
            }
            if passes.is_enabled(SyncPass::RotationIn) && passes.is_enabled(SyncPass::RotationOut) {
                app.add_systems(
                    schedule,
                    systems::detect_rotation_marker_conflicts.in_set(NavAgentSet::SyncIn),
                );
            }
        }

        tracing::info!(
            "[navsync] registered sync passes [{}] in {:?} (conflict policy: {:?})",
            pass_names(&self.config.passes),
            schedule,
            self.config.conflict_policy
        );
    }
}
