//! Store trait definitions

use presence_model::{Person, Snapshot};
use presence_util::SnapshotId;

use crate::StoreResult;

/// Main store trait
pub trait Store: Send + Sync {
    // Roster

    /// Load the whole roster. `None` when nothing has been saved yet.
    fn load_roster(&self) -> StoreResult<Option<Vec<Person>>>;

    /// Replace the persisted roster with `people`, atomically.
    fn save_roster(&self, people: &[Person]) -> StoreResult<()>;

    // Snapshots

    /// Insert a snapshot and return it with its assigned id
    fn add_snapshot(&self, snapshot: Snapshot) -> StoreResult<Snapshot>;

    /// Fetch a snapshot by id
    fn get_snapshot(&self, id: SnapshotId) -> StoreResult<Option<Snapshot>>;

    /// All snapshots, most recent timestamp first
    fn list_snapshots(&self) -> StoreResult<Vec<Snapshot>>;

    /// Remove a snapshot; unknown ids are a no-op
    fn delete_snapshot(&self, id: SnapshotId) -> StoreResult<()>;

    /// Number of stored snapshots
    fn snapshot_count(&self) -> StoreResult<usize>;

    /// Id of the snapshot with the smallest timestamp, if any
    fn oldest_snapshot(&self) -> StoreResult<Option<SnapshotId>>;

    // Health

    /// Check if store is healthy
    fn is_healthy(&self) -> bool;
}
