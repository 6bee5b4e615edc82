//! Habits module - completion rates and streaks under the day boundary.

mod habits_model;
mod habits_stats;

#[cfg(test)]
mod habits_tests;

pub use habits_model::{CompletionSummary, HabitCompletion, StreakInfo};
pub use habits_stats::{completed_dates, completion_summary, streaks, summaries_by_habit};
