use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::constants::DEFAULT_TIMEZONE;
use crate::errors::{Error, Result};

/// Converts a UTC instant to wall-clock time in the given timezone.
///
/// The day-boundary rule operates on local hours, so every instant must pass
/// through here before an effective date is derived from it.
pub fn local_datetime_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDateTime {
    instant.with_timezone(&tz).naive_local()
}

/// Parses an IANA timezone name such as `Europe/Berlin`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| Error::InvalidConfigValue(format!("Unknown timezone '{}': {}", name, e)))
}

pub fn default_timezone() -> Tz {
    DEFAULT_TIMEZONE.parse::<Tz>().unwrap_or(Tz::UTC)
}

/// Signed number of whole days from `earlier` to `later`.
pub fn days_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_local_datetime_from_utc_applies_offset() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 10, 3, 30, 0).unwrap();
        let tz: Tz = "America/New_York".parse().unwrap();
        let local = local_datetime_from_utc(instant, tz);
        assert_eq!(
            local,
            NaiveDate::from_ymd_opt(2024, 3, 9)
                .unwrap()
                .and_hms_opt(22, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("Europe/Berlin").unwrap(), Tz::Europe__Berlin);
        assert_eq!(parse_timezone(" UTC ").unwrap(), Tz::UTC);
        assert!(matches!(
            parse_timezone("Mars/Olympus"),
            Err(Error::InvalidConfigValue(_))
        ));
    }

    #[test]
    fn test_days_between_is_signed() {
        let a = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(days_between(b, a), 30);
        assert_eq!(days_between(a, b), -30);
        assert_eq!(days_between(a, a), 0);
    }

    #[test]
    fn test_default_timezone_is_utc() {
        assert_eq!(default_timezone(), Tz::UTC);
    }
}
