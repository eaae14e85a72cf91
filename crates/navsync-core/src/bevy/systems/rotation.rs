//! Rotation sync passes. Same ordering contract as the position passes.

use bevy::prelude::*;

use crate::bevy::{NavAgent, Rotation, SyncRotationFromAgent, SyncRotationToAgent};

/// `Rotation` → agent pose, for entities tagged [`SyncRotationToAgent`].
pub fn sync_rotation_to_agent(
    mut agents: Query<(&mut NavAgent, &Rotation), With<SyncRotationToAgent>>,
) {
    agents.par_iter_mut().for_each(|(mut agent, rotation)| {
        agent.rotation = rotation.0;
    });
}

/// Agent pose → `Rotation`, for entities tagged [`SyncRotationFromAgent`].
pub fn sync_rotation_from_agent(
    mut agents: Query<(&NavAgent, &mut Rotation), With<SyncRotationFromAgent>>,
) {
    agents.par_iter_mut().for_each(|(agent, mut rotation)| {
        rotation.0 = agent.rotation;
    });
}
