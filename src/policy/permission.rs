//! Capability registration and per-player grants

use crate::core::types::PlayerId;
use ahash::{AHashMap, AHashSet};

/// Players holding this capability raid at full damage regardless of
/// owner connection state.
pub const IGNORE: &str = "raidguard.ignore";

/// Registered capability names and which players hold them
#[derive(Debug, Default)]
pub struct PermissionRegistry {
    registered: AHashSet<String>,
    grants: AHashMap<PlayerId, AHashSet<String>>,
}

impl PermissionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str) {
        self.registered.insert(name.to_string());
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.registered.contains(name)
    }

    pub fn grant(&mut self, player: PlayerId, name: &str) {
        self.grants.entry(player).or_default().insert(name.to_string());
    }

    pub fn revoke(&mut self, player: PlayerId, name: &str) {
        if let Some(held) = self.grants.get_mut(&player) {
            held.remove(name);
        }
    }

    pub fn has(&self, player: PlayerId, name: &str) -> bool {
        self.grants
            .get(&player)
            .is_some_and(|held| held.contains(name))
    }
}
