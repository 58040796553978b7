//! Damage events and per-kind damage magnitudes

use crate::core::types::{EntityId, PlayerId};
use serde::{Deserialize, Serialize};

/// Damage categories the host distinguishes on combat events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageKind {
    Explosion,
    Bullet,
    Slash,
    Blunt,
    Heat,
    Decay,
}

/// Per-kind damage magnitudes carried by a combat event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DamageAmounts {
    amounts: Vec<(DamageKind, f32)>,
}

impl DamageAmounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(kind: DamageKind, amount: f32) -> Self {
        let mut amounts = Self::new();
        amounts.add(kind, amount);
        amounts
    }

    /// Accumulate damage of one kind onto the event.
    pub fn add(&mut self, kind: DamageKind, amount: f32) {
        if let Some(slot) = self.amounts.iter_mut().find(|(k, _)| *k == kind) {
            slot.1 += amount;
        } else {
            self.amounts.push((kind, amount));
        }
    }

    pub fn get(&self, kind: DamageKind) -> f32 {
        self.amounts
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0.0, |(_, amount)| *amount)
    }

    /// Whether the event carries any damage of this kind.
    pub fn has(&self, kind: DamageKind) -> bool {
        self.get(kind) > 0.0
    }

    pub fn total(&self) -> f32 {
        self.amounts.iter().map(|(_, amount)| amount).sum()
    }

    /// Multiply every component in place.
    pub fn scale_all(&mut self, factor: f32) {
        for (_, amount) in &mut self.amounts {
            *amount *= factor;
        }
    }
}

/// A single combat interaction against a world entity
///
/// Transient: created by the host per interaction, mutated only by
/// mitigation, then consumed by the damage pipeline.
#[derive(Debug, Clone)]
pub struct DamageEvent {
    pub target: EntityId,
    pub damage: DamageAmounts,
    /// Initiating player, if the damage source is human
    pub attacker: Option<PlayerId>,
}

impl DamageEvent {
    pub fn new(target: EntityId, damage: DamageAmounts, attacker: Option<PlayerId>) -> Self {
        Self { target, damage, attacker }
    }
}
