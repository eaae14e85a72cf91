//! Position sync passes.
//!
//! `sync_position_to_agent` runs before the agent update so the agent starts
//! from the externally supplied position; `sync_position_from_agent` runs
//! after it so consumers see the position computed this tick.

use bevy::prelude::*;

use crate::bevy::{NavAgent, Position, SyncPositionFromAgent, SyncPositionToAgent};

/// `Position` → agent pose, for entities tagged [`SyncPositionToAgent`].
pub fn sync_position_to_agent(
    mut agents: Query<(&mut NavAgent, &Position), With<SyncPositionToAgent>>,
) {
    agents.par_iter_mut().for_each(|(mut agent, position)| {
        agent.position = position.0;
    });
}

/// Agent pose → `Position`, for entities tagged [`SyncPositionFromAgent`].
pub fn sync_position_from_agent(
    mut agents: Query<(&NavAgent, &mut Position), With<SyncPositionFromAgent>>,
) {
    agents.par_iter_mut().for_each(|(agent, mut position)| {
        position.0 = agent.position;
    });
}
