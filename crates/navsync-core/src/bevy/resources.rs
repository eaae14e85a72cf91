//! ECS Resources for the sync layer.

use bevy::prelude::*;

use crate::config::{NavAgentSyncConfig, SyncPass};

/// Sync configuration resource.
///
/// Read every tick by the pass run conditions, so flipping a flag here
/// switches a registered pass off or back on without rebuilding the app.
#[derive(Resource, Debug, Clone, Default)]
pub struct SyncConfigRes(pub NavAgentSyncConfig);

impl SyncConfigRes {
    pub fn new(config: NavAgentSyncConfig) -> Self {
        Self(config)
    }

    pub fn is_enabled(&self, pass: SyncPass) -> bool {
        self.0.passes.is_enabled(pass)
    }

    pub fn set_enabled(&mut self, pass: SyncPass, enabled: bool) {
        self.0.passes.set(pass, enabled);
    }
}
