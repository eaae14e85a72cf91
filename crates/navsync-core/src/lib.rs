//! Navsync Core Library
//!
//! Keeps a navigation agent's authoritative pose in sync with the generic
//! transform components the rest of a simulation reads and writes.
//!
//! This library is split in two layers:
//! - Plain data: pose math and the serde configuration (no ECS required)
//! - Bevy mode: components, marker tags, the five sync passes and the plugin
//!   that orders them around the host's agent-update step

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod pose;

// Bevy integration
pub mod bevy;

pub use config::{MarkerConflictPolicy, NavAgentSyncConfig, SyncConfigError, SyncPass, SyncPasses};
pub use pose::{compose_pose_matrix, decompose_pose_matrix};
