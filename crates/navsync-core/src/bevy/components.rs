//! ECS Components for the sync layer.
//!
//! The agent pose is owned by the navigation side; `Position`, `Rotation` and
//! `LocalToWorld` are the generic transform components everything else reads.
//! The four `Sync*` markers are zero-size opt-in tags. The passes never add or
//! remove any of these, only overwrite values in place.

use bevy::prelude::*;

use crate::pose::compose_pose_matrix;

/// Authoritative pose of a navigation agent.
///
/// Path following and steering write this directly; the sync passes copy it
/// to and from the external transform components.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct NavAgent {
    pub position: Vec3,
    pub rotation: Quat,
}

impl NavAgent {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    /// World matrix for this pose (unit scale).
    pub fn matrix(&self) -> Mat4 {
        compose_pose_matrix(self.position, self.rotation)
    }
}

/// External world-space position of an entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec3);

/// External world-space orientation of an entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation(pub Quat);

/// Derived world matrix.
///
/// Only written by `sync_pose_to_matrix`, and only for entities that have no
/// `Position` or `Rotation` of their own.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct LocalToWorld(pub Mat4);

// ============================================================================
// Marker tags
// ============================================================================

/// The agent accepts its position from the entity's `Position` component.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct SyncPositionToAgent;

/// The agent exports its position to the entity's `Position` component.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct SyncPositionFromAgent;

/// The agent accepts its rotation from the entity's `Rotation` component.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct SyncRotationToAgent;

/// The agent exports its rotation to the entity's `Rotation` component.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct SyncRotationFromAgent;
