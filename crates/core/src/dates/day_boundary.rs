//! Day boundary configuration.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_DAY_BOUNDARY_HOUR, MAX_DAY_BOUNDARY_HOUR};
use crate::errors::{DateError, Error, Result, ValidationError};

/// Hour of day before which activity is attributed to the previous day.
///
/// Always holds a value in `0..=23`. A boundary of 0 disables rollback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayBoundaryConfig(u32);

impl DayBoundaryConfig {
    pub fn new(boundary_hour: u32) -> std::result::Result<Self, DateError> {
        if boundary_hour > MAX_DAY_BOUNDARY_HOUR {
            return Err(DateError::InvalidConfiguration {
                hour: boundary_hour,
            });
        }
        Ok(Self(boundary_hour))
    }

    pub fn boundary_hour(&self) -> u32 {
        self.0
    }
}

impl Default for DayBoundaryConfig {
    fn default() -> Self {
        Self(DEFAULT_DAY_BOUNDARY_HOUR)
    }
}

impl fmt::Display for DayBoundaryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DayBoundaryConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hour = s
            .trim()
            .parse::<u32>()
            .map_err(|e| Error::Validation(ValidationError::IntegerParse(e)))?;
        Ok(Self::new(hour)?)
    }
}

impl TryFrom<u32> for DayBoundaryConfig {
    type Error = DateError;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for DayBoundaryConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for DayBoundaryConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let hour = u32::deserialize(deserializer)?;
        DayBoundaryConfig::new(hour).map_err(serde::de::Error::custom)
    }
}
