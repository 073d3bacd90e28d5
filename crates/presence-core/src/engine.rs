//! The UI-facing command surface.
//!
//! Every mutation intent from the shell (add/remove/mark/restore/import)
//! funnels through `PresenceEngine`, which applies the business rules on
//! top of the raw roster invariants and writes the roster through to the
//! persistence collaborator after each change.

use presence_config::AppConfig;
use presence_model::{
    default_avatar_url, AttendanceStatus, Calendar, Group, Person, Snapshot,
};
use presence_store::Store;
use presence_util::{format_clock_label, now, PersonId, PresenceError, Result, SnapshotId};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::stats::{self, GlobalStats, GroupFilter, PersonStats, PresenceFilter};
use crate::Roster;

/// A status the shell can mark a cell with. `Pending` is never sent
/// directly; it is reached by toggling the same status twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Present,
    Absent,
}

impl Mark {
    fn status(self) -> AttendanceStatus {
        match self {
            Mark::Present => AttendanceStatus::Present,
            Mark::Absent => AttendanceStatus::Absent,
        }
    }
}

/// The roster engine: owns the live roster and the persistence collaborator
pub struct PresenceEngine {
    roster: Roster,
    calendar: Calendar,
    justifications: Vec<String>,
    max_snapshots: usize,
    store: Arc<dyn Store>,
}

impl PresenceEngine {
    /// Load the roster from the store, seeding it from the config on a
    /// fresh store.
    pub fn new(config: AppConfig, store: Arc<dyn Store>) -> Result<Self> {
        let roster = match store.load_roster() {
            Ok(Some(people)) => {
                debug!(count = people.len(), "Roster loaded from store");
                Roster::from_people(people)
            }
            Ok(None) => {
                let roster = Roster::from_people(config.seed_roster.clone());
                if !roster.is_empty() {
                    store
                        .save_roster(roster.people())
                        .map_err(|e| PresenceError::persistence(e.to_string()))?;
                }
                info!(count = roster.len(), "Store empty, roster seeded from config");
                roster
            }
            Err(e) => return Err(PresenceError::persistence(e.to_string())),
        };

        info!(
            people = roster.len(),
            tracked_days = config.calendar.len(),
            "Presence engine initialized"
        );

        Ok(Self {
            roster,
            calendar: config.calendar,
            justifications: config.justifications,
            max_snapshots: config.max_snapshots,
            store,
        })
    }

    pub fn people(&self) -> &[Person] {
        self.roster.people()
    }

    pub fn get_person(&self, id: &PersonId) -> Option<&Person> {
        self.roster.get(id)
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Ordered justification list; the first entry is the provisional
    /// default for fresh absences
    pub fn justifications(&self) -> &[String] {
        &self.justifications
    }

    fn default_justification(&self) -> String {
        self.justifications[0].clone()
    }

    fn persist(&self) -> Result<()> {
        // The in-memory roster is already updated and stays the source of
        // truth even when the write fails
        self.store
            .save_roster(self.roster.people())
            .map_err(|e| PresenceError::persistence(e.to_string()))
    }

    // Mutations

    /// Add a person. The name is trimmed and uppercased for display; the
    /// avatar is derived from it.
    pub fn add_person(&mut self, name: &str, group: Group) -> Result<Person> {
        let display_name = name.trim().to_uppercase();
        let avatar = default_avatar_url(&display_name);
        let person = self
            .roster
            .add_person(&display_name, group, avatar)?
            .clone();

        info!(person_id = %person.id, group = person.group.label(), "Person added");
        self.persist()?;
        Ok(person)
    }

    /// Remove a person and their attendance data; unknown ids are a no-op.
    pub fn remove_person(&mut self, id: &PersonId) -> Result<()> {
        if self.roster.remove_person(id) {
            info!(person_id = %id, "Person removed");
            self.persist()?;
        }
        Ok(())
    }

    /// Mark a person present or absent for a date.
    ///
    /// Marking the status that is already stored clears the cell back to
    /// `Pending` (toggle-to-clear). A fresh transition to `Absent` without
    /// a justification gets the default one so an absence is never stored
    /// unjustified.
    ///
    /// Returns the status now stored for that cell.
    pub fn mark_attendance(
        &mut self,
        id: &PersonId,
        date_key: &str,
        mark: Mark,
        justification: Option<String>,
    ) -> Result<AttendanceStatus> {
        let person = self
            .roster
            .get(id)
            .ok_or_else(|| PresenceError::PersonNotFound(id.clone()))?;
        let current = person.status_on(date_key);
        let requested = mark.status();

        let status = if current == requested {
            // Toggle-to-clear: same status twice acts as an undo
            self.roster
                .set_attendance(id, date_key, AttendanceStatus::Pending, None)?;
            AttendanceStatus::Pending
        } else {
            let justification = match mark {
                Mark::Absent => {
                    Some(justification.unwrap_or_else(|| self.default_justification()))
                }
                Mark::Present => None,
            };
            self.roster
                .set_attendance(id, date_key, requested, justification)?;
            requested
        };

        debug!(person_id = %id, date = date_key, status = ?status, "Attendance marked");
        self.persist()?;
        Ok(status)
    }

    /// Explicitly set the justification for a date, marking it absent.
    ///
    /// This is the only path that rewrites an existing justification;
    /// re-marking an already-absent day never resets it.
    pub fn change_justification(
        &mut self,
        id: &PersonId,
        date_key: &str,
        justification: impl Into<String>,
    ) -> Result<()> {
        self.roster.set_attendance(
            id,
            date_key,
            AttendanceStatus::Absent,
            Some(justification.into()),
        )?;

        debug!(person_id = %id, date = date_key, "Justification changed");
        self.persist()
    }

    // Views

    pub fn filter_people(&self, group: GroupFilter, presence: PresenceFilter) -> Vec<&Person> {
        stats::filter_people(self.roster.people(), group, presence)
    }

    pub fn global_stats(&self) -> GlobalStats {
        stats::global_stats(self.roster.people(), &self.calendar)
    }

    pub fn person_stats(&self, id: &PersonId) -> Option<PersonStats> {
        self.roster
            .get(id)
            .map(|p| stats::person_stats(p, &self.calendar))
    }

    // Snapshots

    /// Create a snapshot of the current roster, then prune the oldest
    /// entries past the retention cap.
    ///
    /// Best-effort: a failed snapshot is logged and must never block the
    /// mutation that triggered it, so failures return `None` rather than
    /// an error.
    pub fn create_snapshot(&self, name: Option<&str>) -> Option<Snapshot> {
        let name = match name {
            Some(n) => n.to_string(),
            None => format!("AUTO-BACKUP-{}", format_clock_label(&now())),
        };

        let snapshot = Snapshot::new(name, self.roster.people().to_vec());
        let stored = match self.store.add_snapshot(snapshot) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "Failed to create snapshot");
                return None;
            }
        };

        info!(snapshot_id = stored.id, name = %stored.name, "Snapshot created");
        self.enforce_retention();
        Some(stored)
    }

    /// Evict oldest-by-timestamp snapshots while the cap is exceeded
    fn enforce_retention(&self) {
        loop {
            match self.store.snapshot_count() {
                Ok(count) if count > self.max_snapshots => {}
                Ok(_) => break,
                Err(e) => {
                    warn!(error = %e, "Failed to count snapshots");
                    break;
                }
            }

            match self.store.oldest_snapshot() {
                Ok(Some(id)) => {
                    if let Err(e) = self.store.delete_snapshot(id) {
                        warn!(snapshot_id = id, error = %e, "Failed to evict snapshot");
                        break;
                    }
                    debug!(snapshot_id = id, "Oldest snapshot evicted");
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "Failed to find oldest snapshot");
                    break;
                }
            }
        }
    }

    /// Atomically replace the live roster with a snapshot's stored copy.
    ///
    /// Returns false on unknown id or when the store cannot be read; the
    /// roster is left unchanged in those cases. A write-through failure
    /// after the replace also returns false, but the in-memory roster now
    /// holds the snapshot data: it is never rolled back.
    pub fn restore_snapshot(&mut self, id: SnapshotId) -> bool {
        let snapshot = match self.store.get_snapshot(id) {
            Ok(Some(s)) => s,
            Ok(None) => {
                warn!(snapshot_id = id, "Snapshot not found");
                return false;
            }
            Err(e) => {
                warn!(snapshot_id = id, error = %e, "Failed to read snapshot");
                return false;
            }
        };

        // Fresh copy: later edits must not reach the stored snapshot
        self.roster.replace_all(snapshot.data.clone());

        if let Err(e) = self.persist() {
            warn!(snapshot_id = id, error = %e, "Failed to persist restored roster");
            return false;
        }

        info!(snapshot_id = id, name = %snapshot.name, "Snapshot restored");
        true
    }

    /// Stored snapshots, most recent first. Store failures read as empty.
    pub fn list_snapshots(&self) -> Vec<Snapshot> {
        match self.store.list_snapshots() {
            Ok(snapshots) => snapshots,
            Err(e) => {
                warn!(error = %e, "Failed to list snapshots");
                Vec::new()
            }
        }
    }

    /// Idempotent snapshot removal
    pub fn delete_snapshot(&self, id: SnapshotId) {
        if let Err(e) = self.store.delete_snapshot(id) {
            warn!(snapshot_id = id, error = %e, "Failed to delete snapshot");
        }
    }

    // Import

    /// Replace the roster with an uploaded JSON export.
    ///
    /// Never panics past this boundary: returns false when the payload is
    /// not valid JSON, not a top-level array, or fails schema checks, and
    /// the roster is left unchanged. A `PRE-IMPORT` snapshot is taken
    /// before the roster is touched. A write-through failure after the
    /// replace also returns false with the imported roster left in memory;
    /// the pre-import snapshot is the recovery path, never a rollback.
    pub fn import_roster(&mut self, contents: &str) -> bool {
        let people = match parse_imported_roster(contents) {
            Ok(people) => people,
            Err(e) => {
                warn!(error = %e, "Import rejected");
                return false;
            }
        };

        self.create_snapshot(Some(&format!(
            "PRE-IMPORT-{}",
            format_clock_label(&now())
        )));

        self.roster.replace_all(people);

        if let Err(e) = self.persist() {
            // The pre-import snapshot is the recovery path from here
            warn!(error = %e, "Failed to persist imported roster");
            return false;
        }

        info!(count = self.roster.len(), "Roster imported");
        true
    }
}

/// Parse and validate an uploaded roster payload
fn parse_imported_roster(contents: &str) -> Result<Vec<Person>> {
    let value: serde_json::Value = serde_json::from_str(contents)
        .map_err(|e| PresenceError::malformed(format!("not valid JSON: {e}")))?;

    if !value.is_array() {
        return Err(PresenceError::malformed("top-level value is not an array"));
    }

    let people: Vec<Person> = serde_json::from_value(value)
        .map_err(|e| PresenceError::malformed(format!("roster shape mismatch: {e}")))?;

    let mut seen = HashSet::new();
    for person in &people {
        if person.name.trim().is_empty() {
            return Err(PresenceError::malformed(format!(
                "person '{}' has an empty name",
                person.id
            )));
        }
        if !seen.insert(person.id.clone()) {
            return Err(PresenceError::malformed(format!(
                "duplicate person id '{}'",
                person.id
            )));
        }
        for (key, record) in &person.attendance {
            if key != &record.date {
                return Err(PresenceError::malformed(format!(
                    "attendance key '{}' does not match record date '{}'",
                    key, record.date
                )));
            }
            if record.justification.is_some() && record.status != AttendanceStatus::Absent {
                return Err(PresenceError::malformed(format!(
                    "record '{}/{}' carries a justification without an ABSENT status",
                    person.id, key
                )));
            }
        }
    }

    Ok(people)
}
