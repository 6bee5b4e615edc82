//! Measurements module - entry series and graph payloads.

mod measurements_graph;
mod measurements_model;


pub use measurements_graph::{build_graph_data, latest_progress};
pub use measurements_model::{
    EntryProgress, Measurement, MeasurementEntries, MeasurementEntry, MeasurementGraphData,
    TargetGraphData,
};
