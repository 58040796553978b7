//! Raidguard - offline raid damage mitigation
//!
//! Scales down explosive damage inflicted on buildings whose owners, and
//! the teammates of everyone authorized on the building, are all offline.
//! Attackers holding the `raidguard.ignore` capability bypass the policy.

pub mod combat;
pub mod core;
pub mod messages;
pub mod plugin;
pub mod policy;
pub mod world;
