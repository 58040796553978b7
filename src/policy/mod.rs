pub mod mitigation;
pub mod permission;

pub use mitigation::{DamageReduced, MitigationPolicy};
pub use permission::PermissionRegistry;
