use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::{debug, warn};
use std::sync::Arc;

use super::{SettingsRepositoryTrait, SettingsServiceTrait, TrackerSettings};
use crate::constants::setting_keys;
use crate::dates::{effective_date_from_utc, DayBoundaryConfig, EffectiveDate};
use crate::errors::{DatabaseError, Error, Result};
use crate::utils::time_utils::{default_timezone, parse_timezone};

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }

    fn get_setting_value(&self, key: &str) -> Result<Option<String>> {
        match self.settings_repository.get_setting(key) {
            Ok(value) => Ok(Some(value)),
            Err(Error::Database(DatabaseError::NotFound(_))) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_tracker_settings(&self) -> Result<TrackerSettings> {
        let day_boundary_hour = self.get_day_boundary()?;
        let timezone = self.get_timezone()?;
        Ok(TrackerSettings {
            day_boundary_hour,
            timezone: timezone.name().to_string(),
        })
    }

    fn get_day_boundary(&self) -> Result<DayBoundaryConfig> {
        match self.get_setting_value(setting_keys::DAY_BOUNDARY_HOUR)? {
            Some(value) => value.parse::<DayBoundaryConfig>().map_err(|e| {
                warn!("Stored day boundary hour '{}' is invalid: {}", value, e);
                Error::InvalidConfigValue(format!(
                    "{} = '{}': {}",
                    setting_keys::DAY_BOUNDARY_HOUR,
                    value,
                    e
                ))
            }),
            None => Ok(DayBoundaryConfig::default()),
        }
    }

    async fn update_day_boundary(&self, boundary_hour: u32) -> Result<DayBoundaryConfig> {
        let config = DayBoundaryConfig::new(boundary_hour)?;
        debug!("Updating day boundary hour to {}", config);
        self.settings_repository
            .update_setting(setting_keys::DAY_BOUNDARY_HOUR, &config.to_string())
            .await?;
        Ok(config)
    }

    fn get_timezone(&self) -> Result<Tz> {
        match self.get_setting_value(setting_keys::TIMEZONE)? {
            Some(value) if !value.trim().is_empty() => parse_timezone(&value).map_err(|e| {
                warn!("Stored timezone '{}' is invalid: {}", value, e);
                e
            }),
            _ => Ok(default_timezone()),
        }
    }

    async fn update_timezone(&self, timezone: &str) -> Result<Tz> {
        let tz = parse_timezone(timezone)?;
        debug!("Updating timezone to {}", tz.name());
        self.settings_repository
            .update_setting(setting_keys::TIMEZONE, tz.name())
            .await?;
        Ok(tz)
    }

    fn effective_today(&self, now: DateTime<Utc>) -> Result<EffectiveDate> {
        let config = self.get_day_boundary()?;
        let tz = self.get_timezone()?;
        Ok(effective_date_from_utc(now, tz, config))
    }
}
