//! Habitboard Core - day-boundary date model and target progress engine.
//!
//! This crate holds the calculations shared by the habit tracker's REST layer
//! and dashboard: what "today" is under a configurable day boundary, where a
//! measurement should be on its goal trajectory, and completion statistics
//! built on both. It is storage-agnostic; settings are read through traits
//! implemented elsewhere.

pub mod constants;
pub mod dates;
pub mod errors;
pub mod habits;
pub mod measurements;
pub mod settings;
pub mod targets;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
