//! Pose ↔ world matrix conversion.
//!
//! A pose is a translation plus an orientation. Scale is always unit: agents
//! carry no scale of their own.

use bevy::math::{Mat4, Quat, Vec3};

/// Builds the world matrix for a pose with unit scale.
pub fn compose_pose_matrix(position: Vec3, rotation: Quat) -> Mat4 {
    Mat4::from_scale_rotation_translation(Vec3::ONE, rotation, position)
}

/// Splits a world matrix back into `(scale, rotation, translation)`.
pub fn decompose_pose_matrix(matrix: &Mat4) -> (Vec3, Quat, Vec3) {
    matrix.to_scale_rotation_translation()
}
