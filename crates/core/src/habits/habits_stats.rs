//! Completion statistics bucketed by effective date.

use chrono::Duration;
use std::collections::{BTreeMap, BTreeSet};

use super::habits_model::{CompletionSummary, HabitCompletion, StreakInfo};
use crate::dates::{effective_date_with, DayBoundaryConfig, EffectiveDate};
use crate::errors::{Error, Result, ValidationError};

/// Distinct effective dates on which any of `completions` happened.
pub fn completed_dates(
    completions: &[HabitCompletion],
    config: DayBoundaryConfig,
) -> BTreeSet<EffectiveDate> {
    completions
        .iter()
        .map(|c| effective_date_with(c.completed_at, config))
        .collect()
}

/// Completion rate over the `window_days` effective days ending at `today`.
///
/// Several completions on one effective day count once. Completions after
/// `today` are ignored.
pub fn completion_summary(
    completions: &[HabitCompletion],
    today: EffectiveDate,
    window_days: u32,
    config: DayBoundaryConfig,
) -> Result<CompletionSummary> {
    if window_days == 0 {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Completion window must cover at least one day".to_string(),
        )));
    }
    let start_date = today
        .checked_sub_signed(Duration::days(i64::from(window_days) - 1))
        .ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Completion window of {} days ending {} is out of range",
                window_days, today
            )))
        })?;
    let completed = completed_dates(completions, config);
    let completed_days = completed.range(start_date..=today).count() as u32;

    Ok(CompletionSummary {
        start_date,
        end_date: today,
        completed_days,
        total_days: window_days,
        completion_rate: f64::from(completed_days) / f64::from(window_days) * 100.0,
    })
}

/// Per-habit completion summaries, keyed by habit id.
pub fn summaries_by_habit(
    completions: &[HabitCompletion],
    today: EffectiveDate,
    window_days: u32,
    config: DayBoundaryConfig,
) -> Result<BTreeMap<String, CompletionSummary>> {
    let mut grouped: BTreeMap<&str, Vec<HabitCompletion>> = BTreeMap::new();
    for completion in completions {
        grouped
            .entry(completion.habit_id.as_str())
            .or_default()
            .push(completion.clone());
    }

    grouped
        .into_iter()
        .map(|(habit_id, habit_completions)| {
            completion_summary(&habit_completions, today, window_days, config)
                .map(|summary| (habit_id.to_string(), summary))
        })
        .collect()
}

/// Current and best runs of consecutive effective days with a completion.
///
/// The current streak stays alive while the last completion was today or
/// yesterday, so an unfinished today does not break it.
pub fn streaks(
    completions: &[HabitCompletion],
    today: EffectiveDate,
    config: DayBoundaryConfig,
) -> StreakInfo {
    let completed = completed_dates(completions, config);

    let mut best = 0u32;
    let mut run = 0u32;
    let mut previous: Option<EffectiveDate> = None;
    for date in completed.range(..=today) {
        run = match previous {
            Some(prev) if prev.succ_opt() == Some(*date) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        previous = Some(*date);
    }

    let current = match previous {
        Some(last) if (today - last).num_days() <= 1 => run,
        _ => 0,
    };

    StreakInfo {
        current,
        best,
        last_completed: previous,
    }
}
