//! Versioned roster snapshots (backups)

use crate::Person;
use presence_util::{now_millis, SnapshotId};
use serde::{Deserialize, Serialize};

/// Format tag written into every new snapshot
pub const SNAPSHOT_FORMAT_VERSION: &str = "1.0";

/// An immutable, timestamped deep copy of the roster.
///
/// `data` is a value copy taken at creation time; later mutation of the
/// live roster never alters a stored snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Surrogate key, assigned by the store on insert
    #[serde(default)]
    pub id: SnapshotId,

    /// Creation instant, epoch milliseconds
    pub timestamp: i64,

    /// Human label, explicit or auto-generated
    pub name: String,

    pub data: Vec<Person>,

    /// Format tag for forward compatibility
    pub version: String,
}

impl Snapshot {
    /// Stamp a new snapshot of `data` with the current time.
    ///
    /// The id is zero until the store assigns one.
    pub fn new(name: impl Into<String>, data: Vec<Person>) -> Self {
        Self {
            id: 0,
            timestamp: now_millis(),
            name: name.into(),
            data,
            version: SNAPSHOT_FORMAT_VERSION.to_string(),
        }
    }
}
