//! Tests for habit completion statistics.

#[cfg(test)]
mod tests {
    use crate::dates::DayBoundaryConfig;
    use crate::errors::{Error, ValidationError};
    use crate::habits::{
        completed_dates, completion_summary, streaks, summaries_by_habit, HabitCompletion,
    };
    use chrono::{NaiveDate, NaiveDateTime};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn completion(habit_id: &str, at: &str) -> HabitCompletion {
        HabitCompletion {
            habit_id: habit_id.to_string(),
            completed_at: NaiveDateTime::parse_from_str(at, "%Y-%m-%dT%H:%M:%S").unwrap(),
        }
    }

    // ==================== completed_dates Tests ====================

    #[test]
    fn test_late_night_completion_counts_for_previous_day() {
        let completions = vec![
            completion("read", "2024-03-09T21:00:00"),
            completion("read", "2024-03-10T01:30:00"),
        ];
        let dates = completed_dates(&completions, DayBoundaryConfig::default());
        assert_eq!(dates.into_iter().collect::<Vec<_>>(), vec![date("2024-03-09")]);
    }

    #[test]
    fn test_zero_boundary_keeps_calendar_dates() {
        let completions = vec![
            completion("read", "2024-03-09T21:00:00"),
            completion("read", "2024-03-10T01:30:00"),
        ];
        let dates = completed_dates(&completions, DayBoundaryConfig::new(0).unwrap());
        assert_eq!(dates.len(), 2);
    }

    // ==================== completion_summary Tests ====================

    #[test]
    fn test_completion_summary_window() {
        let completions = vec![
            completion("run", "2024-03-04T07:00:00"),
            completion("run", "2024-03-05T07:00:00"),
            completion("run", "2024-03-05T19:00:00"),
            completion("run", "2024-03-07T03:00:00"), // effective 03-06
            completion("run", "2024-02-20T07:00:00"), // outside window
            completion("run", "2024-03-09T07:00:00"), // after today
        ];
        let summary = completion_summary(
            &completions,
            date("2024-03-07"),
            7,
            DayBoundaryConfig::default(),
        )
        .unwrap();

        assert_eq!(summary.start_date, date("2024-03-01"));
        assert_eq!(summary.end_date, date("2024-03-07"));
        assert_eq!(summary.completed_days, 3);
        assert_eq!(summary.total_days, 7);
        assert!((summary.completion_rate - 300.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_completion_summary_empty() {
        let summary =
            completion_summary(&[], date("2024-03-07"), 30, DayBoundaryConfig::default()).unwrap();
        assert_eq!(summary.completed_days, 0);
        assert_eq!(summary.completion_rate, 0.0);
    }

    #[test]
    fn test_completion_summary_zero_window() {
        let result = completion_summary(&[], date("2024-03-07"), 0, DayBoundaryConfig::default());
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_completion_summary_window_before_earliest_date() {
        let result = completion_summary(
            &[],
            date("2024-01-10"),
            u32::MAX,
            DayBoundaryConfig::default(),
        );
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));

        let result = completion_summary(&[], NaiveDate::MIN, 2, DayBoundaryConfig::default());
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_summaries_by_habit() {
        let completions = vec![
            completion("run", "2024-03-06T07:00:00"),
            completion("read", "2024-03-06T22:00:00"),
            completion("read", "2024-03-07T22:00:00"),
        ];
        let summaries = summaries_by_habit(
            &completions,
            date("2024-03-07"),
            2,
            DayBoundaryConfig::default(),
        )
        .unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries["run"].completed_days, 1);
        assert_eq!(summaries["read"].completed_days, 2);
        assert_eq!(summaries["read"].completion_rate, 100.0);
    }

    // ==================== streaks Tests ====================

    #[test]
    fn test_streak_alive_when_today_not_done_yet() {
        let completions = vec![
            completion("run", "2024-03-04T07:00:00"),
            completion("run", "2024-03-05T07:00:00"),
            completion("run", "2024-03-06T07:00:00"),
        ];
        let info = streaks(&completions, date("2024-03-07"), DayBoundaryConfig::default());
        assert_eq!(info.current, 3);
        assert_eq!(info.best, 3);
        assert_eq!(info.last_completed, Some(date("2024-03-06")));
    }

    #[test]
    fn test_streak_broken_after_missed_day() {
        let completions = vec![
            completion("run", "2024-03-01T07:00:00"),
            completion("run", "2024-03-02T07:00:00"),
            completion("run", "2024-03-03T07:00:00"),
            completion("run", "2024-03-05T07:00:00"),
        ];
        let info = streaks(&completions, date("2024-03-07"), DayBoundaryConfig::default());
        assert_eq!(info.current, 0);
        assert_eq!(info.best, 3);
    }

    #[test]
    fn test_streak_uses_effective_dates() {
        // 02:00 on the 6th belongs to the 5th under a 6 o'clock boundary.
        let completions = vec![
            completion("run", "2024-03-04T20:00:00"),
            completion("run", "2024-03-06T02:00:00"),
            completion("run", "2024-03-06T20:00:00"),
        ];
        let info = streaks(&completions, date("2024-03-06"), DayBoundaryConfig::default());
        assert_eq!(info.current, 3);

        let calendar = streaks(
            &completions,
            date("2024-03-06"),
            DayBoundaryConfig::new(0).unwrap(),
        );
        assert_eq!(calendar.current, 1);
        assert_eq!(calendar.best, 1);
    }

    #[test]
    fn test_streak_empty() {
        let info = streaks(&[], date("2024-03-07"), DayBoundaryConfig::default());
        assert_eq!(info, Default::default());
    }
}
