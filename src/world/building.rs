//! Buildings, privileges, and the damageable entities attached to them

use crate::core::types::{BuildingId, PlayerId};
use serde::{Deserialize, Serialize};

/// An authorization record listing players allowed to build on a structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildingPrivilege {
    pub authorized_players: Vec<PlayerId>,
}

impl BuildingPrivilege {
    pub fn is_authorized(&self, player: PlayerId) -> bool {
        self.authorized_players.contains(&player)
    }
}

/// A connected structure of building blocks, optionally claimed by
/// one or more privileges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub block_count: usize,
    pub privileges: Vec<BuildingPrivilege>,
}

impl Building {
    pub fn has_privilege(&self) -> bool {
        !self.privileges.is_empty()
    }

    /// True when any privilege on the building lists the player.
    pub fn is_authorized(&self, player: PlayerId) -> bool {
        self.privileges
            .iter()
            .any(|privilege| privilege.is_authorized(player))
    }
}

/// A damageable entity belonging to a building
///
/// Blocks are the structural pieces themselves; decay entities are
/// attachments (doors, deployables) tied to the same building. Both expose
/// the building id and owner uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildingEntity {
    Block {
        building: BuildingId,
        owner: Option<PlayerId>,
    },
    Decay {
        building: BuildingId,
        owner: Option<PlayerId>,
    },
}

impl BuildingEntity {
    pub fn building_id(&self) -> BuildingId {
        match self {
            Self::Block { building, .. } | Self::Decay { building, .. } => *building,
        }
    }

    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            Self::Block { owner, .. } | Self::Decay { owner, .. } => *owner,
        }
    }
}
