//! Shared utilities for presence-tracker
//!
//! This crate provides:
//! - ID types (PersonId, SnapshotId)
//! - Date-key helpers (ISO `YYYY-MM-DD` map keys, display labels)
//! - Error types

mod error;
mod ids;
mod time;

pub use error::*;
pub use ids::*;
pub use time::*;
