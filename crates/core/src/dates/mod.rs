//! Dates module - day-boundary aware effective date calculation.

mod day_boundary;
mod effective_date;


pub use crate::utils::time_utils::days_between;
pub use day_boundary::DayBoundaryConfig;
pub use effective_date::{
    effective_date, effective_date_from_utc, effective_date_range, effective_date_with,
    format_date, is_before, is_today, parse_date, EffectiveDate,
};
