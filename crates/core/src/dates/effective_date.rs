//! Effective date calculation under a configurable day boundary.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;

use super::day_boundary::DayBoundaryConfig;
use crate::constants::DATE_FORMAT;
use crate::errors::{DateError, Result};
use crate::utils::time_utils::local_datetime_from_utc;

/// A calendar date with no time-of-day, as attributed by the day-boundary rule.
pub type EffectiveDate = NaiveDate;

/// Returns the effective date of a local wall-clock timestamp.
///
/// Timestamps whose hour is strictly below `boundary_hour` belong to the
/// previous calendar day. Fails with `DateError::InvalidConfiguration` when
/// `boundary_hour` is outside `0..=23`.
pub fn effective_date(timestamp: NaiveDateTime, boundary_hour: u32) -> Result<EffectiveDate> {
    let config = DayBoundaryConfig::new(boundary_hour)?;
    Ok(effective_date_with(timestamp, config))
}

/// Same as [`effective_date`] for an already validated configuration.
pub fn effective_date_with(timestamp: NaiveDateTime, config: DayBoundaryConfig) -> EffectiveDate {
    let calendar_date = timestamp.date();
    if timestamp.hour() < config.boundary_hour() {
        // NaiveDate::MIN has no predecessor; stay put rather than wrap.
        calendar_date.pred_opt().unwrap_or(calendar_date)
    } else {
        calendar_date
    }
}

/// Converts a UTC instant to local time in `tz`, then applies the boundary rule.
pub fn effective_date_from_utc(
    instant: DateTime<Utc>,
    tz: Tz,
    config: DayBoundaryConfig,
) -> EffectiveDate {
    effective_date_with(local_datetime_from_utc(instant, tz), config)
}

/// Every date from `start` to `end` inclusive, ascending.
pub fn effective_date_range(
    start: EffectiveDate,
    end: EffectiveDate,
) -> Result<Vec<EffectiveDate>> {
    if end < start {
        return Err(DateError::InvalidRange { start, end }.into());
    }
    Ok(start.iter_days().take_while(|d| *d <= end).collect())
}

/// True when `date` lies strictly before the effective date of `reference_now`.
pub fn is_before(
    date: NaiveDate,
    reference_now: NaiveDateTime,
    boundary_hour: u32,
) -> Result<bool> {
    Ok(date < effective_date(reference_now, boundary_hour)?)
}

/// True when `date` is the effective date of `reference_now`.
pub fn is_today(date: NaiveDate, reference_now: NaiveDateTime, boundary_hour: u32) -> Result<bool> {
    Ok(date == effective_date(reference_now, boundary_hour)?)
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<EffectiveDate> {
    Ok(NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)?)
}

pub fn format_date(date: EffectiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

