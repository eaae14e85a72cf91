//! Sync configuration.
//!
//! Selects which of the five passes a host opts into and how marker conflicts
//! are reported. Loaded from JSON; every field is optional and an omitted pass
//! stays off.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Error type for loading a [`NavAgentSyncConfig`].
#[derive(Debug, thiserror::Error)]
pub enum SyncConfigError {
    #[error("Failed to read sync config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid sync config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One of the five synchronization passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncPass {
    /// Agent pose → world matrix, for entities without `Position`/`Rotation`.
    PoseToMatrix,
    /// External position → agent pose.
    PositionIn,
    /// Agent pose → external position.
    PositionOut,
    /// External rotation → agent pose.
    RotationIn,
    /// Agent pose → external rotation.
    RotationOut,
}

impl SyncPass {
    pub const ALL: [SyncPass; 5] = [
        SyncPass::PoseToMatrix,
        SyncPass::PositionIn,
        SyncPass::PositionOut,
        SyncPass::RotationIn,
        SyncPass::RotationOut,
    ];

    /// Returns true for passes that must run before the agent update.
    pub fn is_inbound(self) -> bool {
        matches!(self, Self::PositionIn | Self::RotationIn)
    }
}

impl fmt::Display for SyncPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PoseToMatrix => "PoseToMatrixSync",
            Self::PositionIn => "PositionInSync",
            Self::PositionOut => "PositionOutSync",
            Self::RotationIn => "RotationInSync",
            Self::RotationOut => "RotationOutSync",
        };
        f.write_str(name)
    }
}

/// Per-pass enable flags. Nothing is enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct SyncPasses {
    pub pose_to_matrix: bool,
    pub position_in: bool,
    pub position_out: bool,
    pub rotation_in: bool,
    pub rotation_out: bool,
}

impl SyncPasses {
    /// Every pass enabled.
    pub const fn all() -> Self {
        Self {
            pose_to_matrix: true,
            position_in: true,
            position_out: true,
            rotation_in: true,
            rotation_out: true,
        }
    }

    /// Every pass disabled.
    pub const fn none() -> Self {
        Self {
            pose_to_matrix: false,
            position_in: false,
            position_out: false,
            rotation_in: false,
            rotation_out: false,
        }
    }

    pub fn is_enabled(&self, pass: SyncPass) -> bool {
        match pass {
            SyncPass::PoseToMatrix => self.pose_to_matrix,
            SyncPass::PositionIn => self.position_in,
            SyncPass::PositionOut => self.position_out,
            SyncPass::RotationIn => self.rotation_in,
            SyncPass::RotationOut => self.rotation_out,
        }
    }

    pub fn set(&mut self, pass: SyncPass, enabled: bool) {
        let flag = match pass {
            SyncPass::PoseToMatrix => &mut self.pose_to_matrix,
            SyncPass::PositionIn => &mut self.position_in,
            SyncPass::PositionOut => &mut self.position_out,
            SyncPass::RotationIn => &mut self.rotation_in,
            SyncPass::RotationOut => &mut self.rotation_out,
        };
        *flag = enabled;
    }

    /// Builder-style variant of [`SyncPasses::set`].
    pub fn with(mut self, pass: SyncPass, enabled: bool) -> Self {
        self.set(pass, enabled);
        self
    }

    /// Iterates the enabled passes in [`SyncPass::ALL`] order.
    pub fn enabled(&self) -> impl Iterator<Item = SyncPass> + '_ {
        SyncPass::ALL.into_iter().filter(|pass| self.is_enabled(*pass))
    }
}

impl Default for SyncPasses {
    fn default() -> Self {
        Self::none()
    }
}

/// What to do when an entity carries both the inbound and outbound marker
/// for the same axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerConflictPolicy {
    /// Do not check.
    Allow,
    /// Log a warning and emit a `SyncMarkerConflict` message.
    #[default]
    Warn,
}

/// Top-level sync configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavAgentSyncConfig {
    pub passes: SyncPasses,
    pub conflict_policy: MarkerConflictPolicy,
}

impl NavAgentSyncConfig {
    pub fn new(passes: SyncPasses) -> Self {
        Self {
            passes,
            conflict_policy: MarkerConflictPolicy::default(),
        }
    }

    /// Every pass enabled, default conflict policy.
    pub fn all() -> Self {
        Self::new(SyncPasses::all())
    }

    pub fn with_conflict_policy(mut self, policy: MarkerConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }

    /// Parses a config from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, SyncConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SyncConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SyncConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_enables_nothing() {
        let config = NavAgentSyncConfig::from_json_str("{}").unwrap();
        assert_eq!(config, NavAgentSyncConfig::default());
        assert_eq!(config.passes, SyncPasses::none());
        assert_eq!(config.passes.enabled().count(), 0);
        assert_eq!(config.conflict_policy, MarkerConflictPolicy::Warn);
    }

    #[test]
    fn test_single_pass_opt_in() {
        let config =
            NavAgentSyncConfig::from_json_str(r#"{ "passes": { "rotation_out": true } }"#).unwrap();

        let enabled: Vec<_> = config.passes.enabled().collect();
        assert_eq!(enabled, vec![SyncPass::RotationOut]);
    }

    #[test]
    fn test_partial_passes_leave_omitted_off() {
        let config = NavAgentSyncConfig::from_json_str(
            r#"{ "passes": { "position_in": true, "position_out": false }, "conflict_policy": "allow" }"#,
        )
        .unwrap();

        assert!(config.passes.is_enabled(SyncPass::PositionIn));
        assert!(!config.passes.is_enabled(SyncPass::PositionOut));
        assert!(!config.passes.is_enabled(SyncPass::PoseToMatrix));
        assert!(!config.passes.is_enabled(SyncPass::RotationIn));
        assert!(!config.passes.is_enabled(SyncPass::RotationOut));
        assert_eq!(config.conflict_policy, MarkerConflictPolicy::Allow);
    }

    #[test]
    fn test_all_enables_every_pass() {
        let config = NavAgentSyncConfig::all();
        let enabled: Vec<_> = config.passes.enabled().collect();
        assert_eq!(enabled, SyncPass::ALL.to_vec());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = NavAgentSyncConfig::from_json_str(r#"{ "conflict_policy": "explode" }"#)
            .unwrap_err();
        assert!(matches!(err, SyncConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = NavAgentSyncConfig::from_path("/definitely/not/here/navsync.json").unwrap_err();
        match err {
            SyncConfigError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here/navsync.json"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_set_and_enabled_order() {
        let passes = SyncPasses::none()
            .with(SyncPass::RotationOut, true)
            .with(SyncPass::PoseToMatrix, true);
        let enabled: Vec<_> = passes.enabled().collect();
        assert_eq!(enabled, vec![SyncPass::PoseToMatrix, SyncPass::RotationOut]);
    }

    #[test]
    fn test_pass_direction_and_names() {
        let inbound: Vec<_> = SyncPass::ALL.into_iter().filter(|p| p.is_inbound()).collect();
        assert_eq!(inbound, vec![SyncPass::PositionIn, SyncPass::RotationIn]);
        assert_eq!(SyncPass::PoseToMatrix.to_string(), "PoseToMatrixSync");
        assert_eq!(SyncPass::RotationIn.to_string(), "RotationInSync");
    }
}
