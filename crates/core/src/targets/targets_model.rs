//! Target domain models.

use chrono::NaiveDate;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::dates::{parse_date, EffectiveDate};
use crate::errors::{DateError, Error, Result, ValidationError};

/// A linear goal trajectory from a start value/date to a goal value/date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub start_value: f64,
    pub goal_value: f64,
    pub start_date: EffectiveDate,
    pub goal_date: EffectiveDate,
    /// Value at which the goal counts as reached, when it differs from `goal_value`.
    pub reach_goal_value: Option<f64>,
}

impl Target {
    /// Builds a target, rejecting non-finite values or spans and a goal date before the start date.
    pub fn new(
        start_value: f64,
        goal_value: f64,
        start_date: NaiveDate,
        goal_date: NaiveDate,
    ) -> Result<Self> {
        ensure_finite("startValue", start_value)?;
        ensure_finite("goalValue", goal_value)?;
        ensure_finite("goalValue - startValue", goal_value - start_value)?;
        if goal_date < start_date {
            return Err(DateError::InvalidRange {
                start: start_date,
                end: goal_date,
            }
            .into());
        }
        Ok(Target {
            start_value,
            goal_value,
            start_date,
            goal_date,
            reach_goal_value: None,
        })
    }

    pub fn with_reach_goal_value(mut self, reach_goal_value: f64) -> Result<Self> {
        ensure_finite("reachGoalValue", reach_goal_value)?;
        self.reach_goal_value = Some(reach_goal_value);
        Ok(self)
    }

    pub fn direction(&self) -> GoalDirection {
        GoalDirection::between(self.start_value, self.goal_value)
    }
}

/// Which way the observed value must move to reach the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalDirection {
    /// Goal value is above the start value (e.g. daily steps)
    Increasing,
    /// Goal value is below the start value (e.g. body weight)
    Decreasing,
    /// Start and goal values are equal
    Flat,
}

impl GoalDirection {
    pub fn between(start_value: f64, goal_value: f64) -> Self {
        if goal_value > start_value {
            GoalDirection::Increasing
        } else if goal_value < start_value {
            GoalDirection::Decreasing
        } else {
            GoalDirection::Flat
        }
    }
}

/// Persisted shape of a target: decimal strings and `YYYY-MM-DD` dates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TargetRecord {
    pub start_value: String,
    pub goal_value: String,
    pub start_date: String,
    pub goal_date: String,
    pub reach_goal_value: Option<String>,
}

impl TryFrom<TargetRecord> for Target {
    type Error = Error;

    fn try_from(record: TargetRecord) -> Result<Self> {
        let target = Target::new(
            parse_decimal_value("startValue", &record.start_value)?,
            parse_decimal_value("goalValue", &record.goal_value)?,
            parse_date(&record.start_date)?,
            parse_date(&record.goal_date)?,
        )?;
        match record.reach_goal_value.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                target.with_reach_goal_value(parse_decimal_value("reachGoalValue", raw)?)
            }
            _ => Ok(target),
        }
    }
}

/// A sampled point on a target trajectory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPoint {
    pub date: EffectiveDate,
    pub expected_value: f64,
}

/// Signed difference between an observed value and the trajectory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deviation {
    pub value: f64,
    pub is_above_target: bool,
}

fn parse_decimal_value(field: &str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field.to_string()).into());
    }
    let decimal = Decimal::from_str(trimmed)?;
    decimal.to_f64().ok_or_else(|| {
        Error::Validation(ValidationError::InvalidInput(format!(
            "{} '{}' cannot be represented as a number",
            field, raw
        )))
    })
}

pub(crate) fn ensure_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidInput(format!("{} must be a finite number", field)).into())
    }
}
