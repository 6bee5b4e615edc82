//! Graph payload assembly for measurements.

use log::debug;

use super::measurements_model::{
    EntryProgress, Measurement, MeasurementEntries, MeasurementGraphData, TargetGraphData,
};
use crate::errors::{Error, Result, TargetError};
use crate::targets::{
    default_interval_days, deviation, expected_value_at, is_goal_reached, progress_percent,
    sample_trajectory, Target,
};

/// Builds the graph payload for a measurement.
///
/// A degenerate target yields `target: None` so the client shows
/// "no target configured"; any other failure is returned.
pub fn build_graph_data(
    measurement: Measurement,
    entries: &MeasurementEntries,
    target: Option<&Target>,
) -> Result<MeasurementGraphData> {
    let target = match target {
        Some(target) => match target_graph_data(target) {
            Ok(data) => Some(data),
            Err(Error::Target(TargetError::DegenerateTarget(reason))) => {
                debug!(
                    "Skipping target line for measurement {}: {}",
                    measurement.id, reason
                );
                None
            }
            Err(e) => return Err(e),
        },
        None => None,
    };

    Ok(MeasurementGraphData {
        measurement,
        entries: entries.iter().collect(),
        target,
    })
}

fn target_graph_data(target: &Target) -> Result<TargetGraphData> {
    let interval = default_interval_days(target)?;
    Ok(TargetGraphData {
        start_value: target.start_value,
        goal_value: target.goal_value,
        start_date: target.start_date,
        goal_date: target.goal_date,
        target_line: sample_trajectory(target, interval)?,
    })
}

/// Progress of the most recent entry against `target`, if any entry exists.
pub fn latest_progress(
    entries: &MeasurementEntries,
    target: &Target,
) -> Result<Option<EntryProgress>> {
    let Some(latest) = entries.latest() else {
        return Ok(None);
    };

    let expected_value = expected_value_at(target, latest.date)?;
    let percent = progress_percent(target, latest.value)?;
    let offset = deviation(target, latest.date, latest.value)?;

    Ok(Some(EntryProgress {
        date: latest.date,
        value: latest.value,
        expected_value,
        progress_percent: percent,
        deviation: offset.value,
        is_above_target: offset.is_above_target,
        goal_reached: is_goal_reached(target, latest.value),
    }))
}
