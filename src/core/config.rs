//! Plugin configuration persisted as a JSON document
//!
//! The document carries its own version tag. On load, a stale version
//! triggers migration: crossing a known breaking version resets the
//! document to defaults, and the tag is rewritten either way.

use crate::core::error::{RaidguardError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Version tag written into fresh and migrated config documents
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default damage reduction when no config exists or migration resets it
pub const DEFAULT_REDUCTION_PERCENTAGE: i64 = 50;

/// Persisted plugin configuration
///
/// Field names match the document keys the plugin has always written,
/// so existing installs keep their settings across upgrades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginConfig {
    #[serde(rename = "Version")]
    pub version: String,

    /// Percentage stripped from explosive damage when all owners are
    /// offline. Interpreted in [0, 100]; out-of-range values are clamped
    /// at load time.
    #[serde(rename = "Damage Reduction Percentage")]
    pub damage_reduction_percentage: i64,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION.to_string(),
            damage_reduction_percentage: DEFAULT_REDUCTION_PERCENTAGE,
        }
    }
}

impl PluginConfig {
    /// Load the config document, creating it with defaults if missing.
    ///
    /// A stale or unreadable version tag triggers migration, and the
    /// sanitized document is always written back.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&content)?;
        config.migrate();
        config.sanitize();
        config.save(path)?;
        Ok(config)
    }

    /// Write the document, pretty-printed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Multiplier applied to each damage component when mitigation fires.
    pub fn reduction_factor(&self) -> f32 {
        1.0 - self.damage_reduction_percentage as f32 / 100.0
    }

    /// Bring a stale document up to the current version.
    ///
    /// Versions older than 1.0.0 (and tags that fail to parse) reset the
    /// whole document to defaults; newer stale versions only get the tag
    /// rewritten.
    fn migrate(&mut self) {
        let stored = PluginVersion::from_str(&self.version).ok();
        if stored.is_some_and(|v| v >= PluginVersion::CURRENT) {
            return;
        }

        tracing::warn!(
            stored = %self.version,
            current = CURRENT_VERSION,
            "config version out of date, updating"
        );

        if stored.is_none_or(|v| v < PluginVersion::new(1, 0, 0)) {
            *self = Self::default();
        }
        self.version = CURRENT_VERSION.to_string();
    }

    /// Clamp the percentage into [0, 100].
    fn sanitize(&mut self) {
        if !(0..=100).contains(&self.damage_reduction_percentage) {
            let clamped = self.damage_reduction_percentage.clamp(0, 100);
            tracing::warn!(
                stored = self.damage_reduction_percentage,
                clamped,
                "damage reduction percentage out of range, clamping"
            );
            self.damage_reduction_percentage = clamped;
        }
    }
}

/// Parsed `major.minor.patch` version, ordered numerically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PluginVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PluginVersion {
    /// The version this build writes into config documents
    pub const CURRENT: Self = Self::new(1, 0, 1);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }
}

impl FromStr for PluginVersion {
    type Err = RaidguardError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split('.');
        let mut next = || -> Result<u32> {
            parts
                .next()
                .and_then(|p| p.parse().ok())
                .ok_or_else(|| RaidguardError::InvalidVersion(s.to_string()))
        };
        let version = Self::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(RaidguardError::InvalidVersion(s.to_string()));
        }
        Ok(version)
    }
}
