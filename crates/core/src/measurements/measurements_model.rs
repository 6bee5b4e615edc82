//! Measurement domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::dates::EffectiveDate;
use crate::errors::{DateError, Result};
use crate::targets::ProgressPoint;

/// Domain model representing a tracked measurement (weight, steps, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub id: String,
    pub name: String,
    pub unit: Option<String>,
    pub created_at: NaiveDateTime,
}

/// An observed value for a measurement on one effective date
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementEntry {
    pub date: EffectiveDate,
    pub value: f64,
}

/// Entries of one measurement, keyed by date.
///
/// Holds at most one entry per date; recording a second value for the same
/// date overwrites the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementEntries {
    by_date: BTreeMap<NaiveDate, f64>,
}

impl MeasurementEntries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the entry for `entry.date`, returning the replaced value.
    pub fn upsert(&mut self, entry: MeasurementEntry) -> Result<Option<f64>> {
        crate::targets::ensure_finite("value", entry.value)?;
        Ok(self.by_date.insert(entry.date, entry.value))
    }

    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.by_date.get(&date).copied()
    }

    pub fn first(&self) -> Option<MeasurementEntry> {
        self.by_date
            .iter()
            .next()
            .map(|(date, value)| MeasurementEntry {
                date: *date,
                value: *value,
            })
    }

    pub fn latest(&self) -> Option<MeasurementEntry> {
        self.by_date
            .iter()
            .next_back()
            .map(|(date, value)| MeasurementEntry {
                date: *date,
                value: *value,
            })
    }

    /// Entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = MeasurementEntry> + '_ {
        self.by_date
            .iter()
            .map(|(date, value)| MeasurementEntry {
                date: *date,
                value: *value,
            })
    }

    /// Entries between `start` and `end` inclusive.
    pub fn in_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<MeasurementEntry>> {
        if end < start {
            return Err(DateError::InvalidRange { start, end }.into());
        }
        Ok(self
            .by_date
            .range(start..=end)
            .map(|(date, value)| MeasurementEntry {
                date: *date,
                value: *value,
            })
            .collect())
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Builds a collection from raw entries; later entries win on duplicate dates.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = MeasurementEntry>,
    {
        let mut collection = Self::new();
        for entry in entries {
            collection.upsert(entry)?;
        }
        Ok(collection)
    }
}

/// Target section of a measurement graph payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TargetGraphData {
    pub start_value: f64,
    pub goal_value: f64,
    pub start_date: EffectiveDate,
    pub goal_date: EffectiveDate,
    pub target_line: Vec<ProgressPoint>,
}

/// Graph payload for a measurement: its entries plus the sampled target line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementGraphData {
    pub measurement: Measurement,
    pub entries: Vec<MeasurementEntry>,
    pub target: Option<TargetGraphData>,
}

/// How the most recent entry stands against the target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntryProgress {
    pub date: EffectiveDate,
    pub value: f64,
    pub expected_value: f64,
    pub progress_percent: f64,
    pub deviation: f64,
    pub is_above_target: bool,
    pub goal_reached: bool,
}
