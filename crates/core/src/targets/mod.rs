//! Targets module - goal trajectories and the progress engine.

mod targets_engine;
mod targets_model;


pub use targets_engine::{
    default_interval_days, deviation, expected_value_at, is_goal_reached, progress_percent,
    sample_trajectory,
};
pub(crate) use targets_model::ensure_finite;
pub use targets_model::{Deviation, GoalDirection, ProgressPoint, Target, TargetRecord};
