//! Agent pose → world matrix.

use bevy::prelude::*;

use crate::bevy::{LocalToWorld, NavAgent, Position, Rotation};

/// Writes each lightweight agent's pose into its `LocalToWorld`.
///
/// Only entities with neither `Position` nor `Rotation` qualify; anything with
/// an explicit transform gets its matrix from whatever owns that transform.
pub fn sync_pose_to_matrix(
    mut agents: Query<(&NavAgent, &mut LocalToWorld), (Without<Position>, Without<Rotation>)>,
) {
    agents.par_iter_mut().for_each(|(agent, mut matrix)| {
        matrix.0 = agent.matrix();
    });
}
