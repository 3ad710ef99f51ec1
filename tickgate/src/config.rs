//! User-configurable startup settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tickgate_core::TickGateError;

/// The zone section of the configuration.
///
/// Two historical shapes exist in the field: one shared zone serving as both
/// feed and calendar zone, and separate feed/calendar zones. The choice is a
/// configuration-time tag, resolved exactly once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneConfig {
    /// One zone serving as both the feed zone and the calendar zone.
    Shared {
        /// Identifier of the shared zone.
        zone: String,
    },
    /// Separate feed and calendar zones.
    Split {
        /// Zone the feed's native timestamps are expressed in.
        feed_zone: String,
        /// Zone whose civil calendar governs holiday determination.
        calendar_zone: String,
    },
}

impl ZoneConfig {
    /// Identifier of the zone feed timestamps are expressed in.
    #[must_use]
    pub fn feed_zone(&self) -> &str {
        match self {
            Self::Shared { zone } => zone,
            Self::Split { feed_zone, .. } => feed_zone,
        }
    }

    /// Identifier of the zone governing holiday determination.
    #[must_use]
    pub fn calendar_zone(&self) -> &str {
        match self {
            Self::Shared { zone } => zone,
            Self::Split { calendar_zone, .. } => calendar_zone,
        }
    }
}

/// Startup configuration, validated before any query becomes reachable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the zone-database alias file. Required; missing, unreadable,
    /// or malformed content is fatal at startup.
    pub tzdb: PathBuf,
    /// Zone identifiers, in either historical shape.
    pub zones: ZoneConfig,
}

impl Config {
    /// Load a JSON configuration file.
    ///
    /// # Errors
    /// Returns `TickGateError::Config` when the file is unreadable or fails
    /// to deserialize or validate.
    pub fn from_file(path: &Path) -> Result<Self, TickGateError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            TickGateError::config(format!("cannot read config {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|e| {
            TickGateError::config(format!("cannot parse config {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every required setting is present.
    ///
    /// # Errors
    /// Returns `TickGateError::Config` naming the first undefined setting.
    pub fn validate(&self) -> Result<(), TickGateError> {
        if self.tzdb.as_os_str().is_empty() {
            return Err(TickGateError::config("undefined time zone database"));
        }
        if self.zones.feed_zone().is_empty() {
            return Err(TickGateError::config("undefined feed zone"));
        }
        if self.zones.calendar_zone().is_empty() {
            return Err(TickGateError::config("undefined calendar zone"));
        }
        Ok(())
    }
}
