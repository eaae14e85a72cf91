//! Marker-conflict diagnostics.
//!
//! Holding both the inbound and outbound marker on one axis is allowed: the
//! inbound pass runs before the agent update and the outbound pass after it,
//! so the external value drives the agent and the agent's result is exported
//! back in the same tick. Since that is rarely what a host meant, it is
//! reported once, when the second marker shows up.

use bevy::prelude::*;

use crate::bevy::{
    SyncAxis, SyncMarkerConflict, SyncPositionFromAgent, SyncPositionToAgent,
    SyncRotationFromAgent, SyncRotationToAgent,
};

type NewlyConflicting<ToAgent, FromAgent> =
    (With<ToAgent>, With<FromAgent>, Or<(Added<ToAgent>, Added<FromAgent>)>);

/// Reports entities that just became marked for both position directions.
pub fn detect_position_marker_conflicts(
    conflicting: Query<Entity, NewlyConflicting<SyncPositionToAgent, SyncPositionFromAgent>>,
    writer: MessageWriter<SyncMarkerConflict>,
) {
    report_conflicts(conflicting.iter(), SyncAxis::Position, writer);
}

/// Reports entities that just became marked for both rotation directions.
pub fn detect_rotation_marker_conflicts(
    conflicting: Query<Entity, NewlyConflicting<SyncRotationToAgent, SyncRotationFromAgent>>,
    writer: MessageWriter<SyncMarkerConflict>,
) {
    report_conflicts(conflicting.iter(), SyncAxis::Rotation, writer);
}

fn report_conflicts(
    entities: impl Iterator<Item = Entity>,
    axis: SyncAxis,
    mut writer: MessageWriter<SyncMarkerConflict>,
) {
    for entity in entities {
        tracing::warn!(
            "[navsync] {:?} is marked to sync {} both to and from its agent",
            entity,
            axis
        );
        writer.write(SyncMarkerConflict { entity, axis });
    }
}
