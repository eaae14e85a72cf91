//! ECS Events (Messages) for the sync layer.
//!
//! Note: In Bevy 0.18+, buffered events use Message trait instead of Event.

use std::fmt;

use bevy::prelude::*;

/// Axis a pair of sync markers applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncAxis {
    Position,
    Rotation,
}

impl fmt::Display for SyncAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position => f.write_str("position"),
            Self::Rotation => f.write_str("rotation"),
        }
    }
}

/// Message fired when an entity ends up with both the inbound and the
/// outbound marker for one axis.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncMarkerConflict {
    /// The entity carrying both markers.
    pub entity: Entity,
    /// The axis both markers refer to.
    pub axis: SyncAxis,
}
