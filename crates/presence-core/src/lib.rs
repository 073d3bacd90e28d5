//! Core roster engine for presence-tracker
//!
//! This crate holds the single source of truth for the roster and every
//! legal way to change it:
//! - `Roster`: the attendance store and its invariants
//! - `stats`: pure filtering and aggregation over a roster
//! - `PresenceEngine`: the UI-facing command surface (attendance policy,
//!   snapshot lifecycle, JSON import) with write-through persistence

mod engine;
mod roster;
pub mod stats;

pub use engine::*;
pub use roster::*;
