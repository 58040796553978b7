//! Offline-owner damage mitigation
//!
//! Explosive damage against a claimed building is scaled down when every
//! player authorized on the building, and every teammate of those players,
//! is offline. The attacker is told the applied percentage so the reduced
//! numbers don't read as a bug.

use crate::combat::{DamageEvent, DamageKind};
use crate::core::config::PluginConfig;
use crate::core::types::PlayerId;
use crate::policy::permission::{self, PermissionRegistry};
use crate::world::{Building, World};

/// Emitted when mitigation fires so the caller can notify the attacker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageReduced {
    pub attacker: PlayerId,
    pub percentage: i64,
}

/// The damage-event policy, holding its configuration by value
#[derive(Debug, Clone)]
pub struct MitigationPolicy {
    config: PluginConfig,
}

impl MitigationPolicy {
    pub fn new(config: PluginConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Damage-event hook.
    ///
    /// Scales the event in place and reports the applied reduction, or
    /// returns `None` when the event is left untouched. Missing references
    /// (unknown entity, unresolved owner or building) are silent no-ops.
    pub fn on_entity_take_damage(
        &self,
        world: &World,
        permissions: &PermissionRegistry,
        event: &mut DamageEvent,
    ) -> Option<DamageReduced> {
        if !event.damage.has(DamageKind::Explosion) {
            return None;
        }

        let attacker = event.attacker?;
        if permissions.has(attacker, permission::IGNORE) {
            return None;
        }

        let owner = world.players.find(world.owner_of(event.target)?)?.id;
        if owner == attacker {
            return None;
        }
        if world.players.are_teammates(owner, attacker) {
            return None;
        }

        let building = world.building_for_entity(event.target, 1, true)?;
        if !all_authorized_offline(world, building, owner) {
            return None;
        }

        event.damage.scale_all(self.config.reduction_factor());
        Some(DamageReduced {
            attacker,
            percentage: self.config.damage_reduction_percentage,
        })
    }
}

/// Whether every authorized player on the building, and every teammate of
/// those players, is offline.
///
/// A teammate who is the building owner defeats mitigation outright, even
/// while offline: the owner has an active claim through that team.
///
/// An empty authorized list vacuously passes, so an unclaimed-but-privileged
/// structure qualifies. Kept for parity with the shipped behavior; logged
/// so operators can spot it.
fn all_authorized_offline(world: &World, building: &Building, owner: PlayerId) -> bool {
    let mut authorized: Vec<PlayerId> = Vec::new();
    for privilege in &building.privileges {
        authorized.extend_from_slice(&privilege.authorized_players);
    }

    if authorized.is_empty() {
        tracing::debug!(
            building = building.id.0,
            "privilege lists no authorized players, treating owners as offline"
        );
    }

    for player in authorized {
        if !world.players.is_offline(player) {
            return false;
        }

        if let Some(team) = world.players.team_of(player) {
            for &member in &team.members {
                if member == owner || !world.players.is_offline(member) {
                    return false;
                }
            }
        }
    }

    true
}
