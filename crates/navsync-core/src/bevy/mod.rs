//! Bevy integration for navsync.
//!
//! This module provides the ECS side of the sync layer: agent and transform
//! components, the four opt-in marker tags, the five sync passes and the
//! plugin that schedules them around the host's agent-update step.

pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

#[cfg(test)]
pub(crate) mod test_utils;

pub use components::*;
pub use events::*;
pub use plugin::{NavAgentSet, NavAgentSyncPlugin, pass_enabled};
pub use resources::*;
pub use systems::{
    detect_position_marker_conflicts, detect_rotation_marker_conflicts, sync_pose_to_matrix,
    sync_position_from_agent, sync_position_to_agent, sync_rotation_from_agent,
    sync_rotation_to_agent,
};
