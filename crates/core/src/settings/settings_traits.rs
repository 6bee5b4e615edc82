//! Repository and service traits for settings.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::dates::{DayBoundaryConfig, EffectiveDate};
use crate::errors::Result;
use crate::settings::TrackerSettings;

/// Repository trait for key/value application settings.
///
/// Implemented by the storage layer. A missing key is reported as
/// `DatabaseError::NotFound`.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Get a single setting value by key.
    fn get_setting(&self, setting_key: &str) -> Result<String>;

    /// Update a single setting.
    async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()>;
}

#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_tracker_settings(&self) -> Result<TrackerSettings>;

    fn get_day_boundary(&self) -> Result<DayBoundaryConfig>;

    async fn update_day_boundary(&self, boundary_hour: u32) -> Result<DayBoundaryConfig>;

    fn get_timezone(&self) -> Result<Tz>;

    async fn update_timezone(&self, timezone: &str) -> Result<Tz>;

    /// Effective date of `now` under the configured timezone and day boundary.
    fn effective_today(&self, now: DateTime<Utc>) -> Result<EffectiveDate>;
}
