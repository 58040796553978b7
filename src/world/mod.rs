//! World state - players, buildings, and the entities that compose them

pub mod building;
pub mod player;

pub use building::{Building, BuildingEntity, BuildingPrivilege};
pub use player::{PlayerDirectory, PlayerRecord, Team};

use crate::core::types::{BuildingId, EntityId, PlayerId};
use ahash::AHashMap;

/// Host-owned world state read by the policy during a damage callback
#[derive(Debug, Default)]
pub struct World {
    pub players: PlayerDirectory,
    buildings: AHashMap<BuildingId, Building>,
    entities: AHashMap<EntityId, BuildingEntity>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_building(&mut self, building: Building) {
        self.buildings.insert(building.id, building);
    }

    pub fn register_entity(&mut self, id: EntityId, entity: BuildingEntity) {
        self.entities.insert(id, entity);
    }

    pub fn entity(&self, id: EntityId) -> Option<&BuildingEntity> {
        self.entities.get(&id)
    }

    pub fn building(&self, id: BuildingId) -> Option<&Building> {
        self.buildings.get(&id)
    }

    pub fn owner_of(&self, entity: EntityId) -> Option<PlayerId> {
        self.entities.get(&entity)?.owner()
    }

    /// Resolve the building a damaged entity belongs to, filtered by a
    /// minimum block count and, optionally, the presence of an active
    /// building privilege.
    pub fn building_for_entity(
        &self,
        entity: EntityId,
        minimum_blocks: usize,
        must_have_privilege: bool,
    ) -> Option<&Building> {
        let entity = self.entities.get(&entity)?;
        let building = self.buildings.get(&entity.building_id())?;

        if building.block_count >= minimum_blocks
            && (!must_have_privilege || building.has_privilege())
        {
            Some(building)
        } else {
            None
        }
    }
}
