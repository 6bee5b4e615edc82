//! Target progress engine.
//!
//! Pure calculations over a [`Target`] trajectory. The server graph endpoint
//! and the dashboard widgets both go through these functions so the numbers
//! they show agree.
//!
//! A target whose start and goal coincide (same dates for interpolation, same
//! values for percentages) fails with `TargetError::DegenerateTarget` rather
//! than falling back to a boundary value. Callers render "no target range".

use chrono::{Duration, NaiveDate};

use super::targets_model::{ensure_finite, Deviation, GoalDirection, ProgressPoint, Target};
use crate::constants::{MAX_TRAJECTORY_STEPS, TRAJECTORY_STEP_DAYS};
use crate::dates::days_between;
use crate::errors::{DateError, Error, Result, TargetError, ValidationError};

/// Whole days from start to goal, validated to be positive.
fn trajectory_span(target: &Target) -> Result<i64> {
    let total_span = days_between(target.goal_date, target.start_date);
    if total_span < 0 {
        return Err(DateError::InvalidRange {
            start: target.start_date,
            end: target.goal_date,
        }
        .into());
    }
    if total_span == 0 {
        return Err(TargetError::DegenerateTarget(format!(
            "start date and goal date are both {}",
            target.start_date
        ))
        .into());
    }
    Ok(total_span)
}

/// Signed distance from start value to goal value, rejected when it overflows.
fn value_span(target: &Target) -> Result<f64> {
    let span = target.goal_value - target.start_value;
    if !span.is_finite() {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "distance from start value {} to goal value {} is too large",
            target.start_value, target.goal_value
        ))));
    }
    Ok(span)
}

/// Linearly interpolated value the target expects on `date`.
///
/// Dates outside `[start_date, goal_date]` clamp to the boundary values.
pub fn expected_value_at(target: &Target, date: NaiveDate) -> Result<f64> {
    let total_span = trajectory_span(target)?;
    let value_span = value_span(target)?;
    let elapsed = days_between(date, target.start_date);
    let progress = (elapsed as f64 / total_span as f64).clamp(0.0, 1.0);

    // Return the boundaries verbatim so endpoints never pick up rounding noise.
    if progress <= 0.0 {
        return Ok(target.start_value);
    }
    if progress >= 1.0 {
        return Ok(target.goal_value);
    }
    Ok(target.start_value + value_span * progress)
}

/// Share of the way from start value to goal value, in `[0, 100]`.
///
/// Works for both decreasing and increasing goals since numerator and
/// denominator flip sign together.
pub fn progress_percent(target: &Target, observed_value: f64) -> Result<f64> {
    ensure_finite("observedValue", observed_value)?;
    let range = -value_span(target)?;
    if range == 0.0 {
        return Err(TargetError::DegenerateTarget(format!(
            "start value and goal value are both {}",
            target.start_value
        ))
        .into());
    }
    let percent = (target.start_value - observed_value) / range * 100.0;
    Ok(percent.clamp(0.0, 100.0))
}

/// Signed difference between `observed_value` and the expected value on `date`.
pub fn deviation(target: &Target, date: NaiveDate, observed_value: f64) -> Result<Deviation> {
    ensure_finite("observedValue", observed_value)?;
    let value = observed_value - expected_value_at(target, date)?;
    ensure_finite("deviation", value)?;
    Ok(Deviation {
        value,
        is_above_target: value > 0.0,
    })
}

/// Samples the trajectory every `interval_days`, always ending exactly on the goal date.
pub fn sample_trajectory(target: &Target, interval_days: u32) -> Result<Vec<ProgressPoint>> {
    if interval_days == 0 {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Trajectory interval must be at least one day".to_string(),
        )));
    }
    let total_span = trajectory_span(target)?;
    let step = i64::from(interval_days);

    let mut points = Vec::with_capacity((total_span / step + 2) as usize);
    let mut offset = 0;
    while offset < total_span {
        let date = target.start_date + Duration::days(offset);
        points.push(ProgressPoint {
            date,
            expected_value: expected_value_at(target, date)?,
        });
        offset += step;
    }
    points.push(ProgressPoint {
        date: target.goal_date,
        expected_value: target.goal_value,
    });
    Ok(points)
}

/// Interval that keeps a sampled trajectory at no more than
/// `MAX_TRAJECTORY_STEPS` steps, roughly one per week.
pub fn default_interval_days(target: &Target) -> Result<u32> {
    let total_span = trajectory_span(target)?;
    let steps = div_ceil(total_span, TRAJECTORY_STEP_DAYS).clamp(1, MAX_TRAJECTORY_STEPS);
    let interval = div_ceil(total_span, steps);
    u32::try_from(interval).map_err(|_| {
        Error::Validation(ValidationError::InvalidInput(format!(
            "Trajectory interval of {} days is too large",
            interval
        )))
    })
}

/// Whether `observed_value` has reached the goal, honouring `reach_goal_value`.
pub fn is_goal_reached(target: &Target, observed_value: f64) -> bool {
    let threshold = target.reach_goal_value.unwrap_or(target.goal_value);
    match target.direction() {
        GoalDirection::Increasing => observed_value >= threshold,
        GoalDirection::Decreasing => observed_value <= threshold,
        GoalDirection::Flat => observed_value == threshold,
    }
}

fn div_ceil(numerator: i64, denominator: i64) -> i64 {
    (numerator + denominator - 1) / denominator
}
