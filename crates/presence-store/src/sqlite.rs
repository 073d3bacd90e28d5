//! SQLite-based store implementation

use presence_model::{Person, Snapshot};
use presence_util::SnapshotId;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::{Store, StoreResult};

/// SQLite-based store
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create a store at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory store (for testing)
    pub fn in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute_batch(
            r#"
            -- Live roster, one row per person
            CREATE TABLE IF NOT EXISTS people (
                id TEXT PRIMARY KEY,
                person_json TEXT NOT NULL
            );

            -- Versioned roster backups
            CREATE TABLE IF NOT EXISTS snapshots (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp INTEGER NOT NULL,
                name TEXT NOT NULL,
                data_json TEXT NOT NULL,
                version TEXT NOT NULL
            );

            -- Indexes
            CREATE INDEX IF NOT EXISTS idx_snapshots_timestamp ON snapshots(timestamp);
            "#,
        )?;

        debug!("Store schema initialized");
        Ok(())
    }

    fn row_to_snapshot(
        id: i64,
        timestamp: i64,
        name: String,
        data_json: &str,
        version: String,
    ) -> StoreResult<Snapshot> {
        let data: Vec<Person> = serde_json::from_str(data_json)?;
        Ok(Snapshot {
            id,
            timestamp,
            name,
            data,
            version,
        })
    }
}

impl Store for SqliteStore {
    fn load_roster(&self) -> StoreResult<Option<Vec<Person>>> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn.prepare("SELECT person_json FROM people ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut people = Vec::new();
        for row in rows {
            let person: Person = serde_json::from_str(&row?)?;
            people.push(person);
        }

        // An empty table reads as "never saved"; callers seed defaults
        if people.is_empty() {
            Ok(None)
        } else {
            Ok(Some(people))
        }
    }

    fn save_roster(&self, people: &[Person]) -> StoreResult<()> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;

        tx.execute("DELETE FROM people", [])?;
        for person in people {
            let person_json = serde_json::to_string(person)?;
            tx.execute(
                "INSERT INTO people (id, person_json) VALUES (?, ?)",
                params![person.id.as_str(), person_json],
            )?;
        }

        tx.commit()?;
        debug!(count = people.len(), "Roster saved");
        Ok(())
    }

    fn add_snapshot(&self, mut snapshot: Snapshot) -> StoreResult<Snapshot> {
        let conn = self.conn.lock().unwrap();
        let data_json = serde_json::to_string(&snapshot.data)?;

        conn.execute(
            "INSERT INTO snapshots (timestamp, name, data_json, version) VALUES (?, ?, ?, ?)",
            params![snapshot.timestamp, snapshot.name, data_json, snapshot.version],
        )?;

        snapshot.id = conn.last_insert_rowid();
        debug!(snapshot_id = snapshot.id, name = %snapshot.name, "Snapshot stored");

        Ok(snapshot)
    }

    fn get_snapshot(&self, id: SnapshotId) -> StoreResult<Option<Snapshot>> {
        let conn = self.conn.lock().unwrap();

        let row = conn
            .query_row(
                "SELECT id, timestamp, name, data_json, version FROM snapshots WHERE id = ?",
                [id],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, i64>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                    ))
                },
            )
            .optional()?;

        match row {
            Some((id, timestamp, name, data_json, version)) => Ok(Some(Self::row_to_snapshot(
                id, timestamp, name, &data_json, version,
            )?)),
            None => Ok(None),
        }
    }

    fn list_snapshots(&self) -> StoreResult<Vec<Snapshot>> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn.prepare(
            "SELECT id, timestamp, name, data_json, version FROM snapshots ORDER BY timestamp DESC, id DESC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut snapshots = Vec::new();
        for row in rows {
            let (id, timestamp, name, data_json, version) = row?;
            snapshots.push(Self::row_to_snapshot(
                id, timestamp, name, &data_json, version,
            )?);
        }

        Ok(snapshots)
    }

    fn delete_snapshot(&self, id: SnapshotId) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM snapshots WHERE id = ?", [id])?;
        Ok(())
    }

    fn snapshot_count(&self) -> StoreResult<usize> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM snapshots", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn oldest_snapshot(&self) -> StoreResult<Option<SnapshotId>> {
        let conn = self.conn.lock().unwrap();

        let id: Option<i64> = conn
            .query_row(
                "SELECT id FROM snapshots ORDER BY timestamp ASC, id ASC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?;

        Ok(id)
    }

    fn is_healthy(&self) -> bool {
        match self.conn.lock() {
            Ok(conn) => conn.query_row("SELECT 1", [], |_| Ok(())).is_ok(),
            Err(_) => {
                warn!("Store lock poisoned");
                false
            }
        }
    }
}
