//! Settings domain models.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TIMEZONE;
use crate::dates::DayBoundaryConfig;

/// Tracker-wide settings that shape how "today" is computed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrackerSettings {
    pub day_boundary_hour: DayBoundaryConfig,
    /// IANA timezone name used to turn stored instants into local times
    pub timezone: String,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        TrackerSettings {
            day_boundary_hour: DayBoundaryConfig::default(),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}
