//! Plugin wiring: configuration, permissions, and localization around
//! the mitigation policy

use crate::combat::DamageEvent;
use crate::core::config::PluginConfig;
use crate::core::error::Result;
use crate::core::types::PlayerId;
use crate::messages::{self, MessageCatalog};
use crate::policy::{permission, MitigationPolicy, PermissionRegistry};
use crate::world::World;
use std::path::Path;

/// A chat message for the host to deliver to a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub to: PlayerId,
    pub text: String,
}

/// The assembled plugin: policy plus the host-facing glue
///
/// Explicitly constructed and passed by reference; holds no global state.
pub struct RaidguardPlugin {
    policy: MitigationPolicy,
    permissions: PermissionRegistry,
    messages: MessageCatalog,
}

impl RaidguardPlugin {
    pub fn new(config: PluginConfig) -> Self {
        let mut permissions = PermissionRegistry::new();
        permissions.register(permission::IGNORE);

        Self {
            policy: MitigationPolicy::new(config),
            permissions,
            messages: MessageCatalog::new(),
        }
    }

    /// Construct from the config document at `path`, creating or migrating
    /// it as needed.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(PluginConfig::load(path)?))
    }

    pub fn policy(&self) -> &MitigationPolicy {
        &self.policy
    }

    pub fn permissions(&self) -> &PermissionRegistry {
        &self.permissions
    }

    pub fn permissions_mut(&mut self) -> &mut PermissionRegistry {
        &mut self.permissions
    }

    /// Damage-event hook surface mirroring the host callback.
    ///
    /// Returns the rendered notice for the attacker exactly when mitigation
    /// was applied; the caller is responsible for delivery. Once the policy
    /// has scaled the event, a notice is always produced, even if a host
    /// replaced the catalog templates.
    pub fn on_entity_take_damage(
        &self,
        world: &World,
        event: &mut DamageEvent,
    ) -> Option<OutboundMessage> {
        let notice = self
            .policy
            .on_entity_take_damage(world, &self.permissions, event)?;
        let text = self.messages.render_or_key(
            "en",
            messages::DAMAGE_REDUCED,
            &[notice.percentage.to_string()],
        );
        Some(OutboundMessage { to: notice.attacker, text })
    }
}
