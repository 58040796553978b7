pub mod damage;

pub use damage::{DamageAmounts, DamageEvent, DamageKind};
