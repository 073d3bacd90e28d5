//! Domain types for presence-tracker
//!
//! The serialized shape of these types is the persisted/exported roster
//! format. It must stay compatible with previously exported JSON files, so
//! field names and enum spellings follow that format exactly.

mod calendar;
mod person;
mod snapshot;

pub use calendar::*;
pub use person::*;
pub use snapshot::*;
