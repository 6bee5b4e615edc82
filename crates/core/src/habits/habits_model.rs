//! Habit completion domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::dates::EffectiveDate;

/// A logged completion of a habit at a local wall-clock time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HabitCompletion {
    pub habit_id: String,
    pub completed_at: NaiveDateTime,
}

/// Completion rate over a window of effective days ending today
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionSummary {
    pub start_date: EffectiveDate,
    pub end_date: EffectiveDate,
    pub completed_days: u32,
    pub total_days: u32,
    /// Percentage of days in the window with at least one completion
    pub completion_rate: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StreakInfo {
    pub current: u32,
    pub best: u32,
    pub last_completed: Option<EffectiveDate>,
}
