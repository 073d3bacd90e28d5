//! Integration tests for the roster engine
//!
//! These tests exercise the full stack against an on-disk store: mutation,
//! write-through persistence, snapshot lifecycle, and import recovery.

use presence_config::{parse_config, AppConfig};
use presence_core::{Mark, PresenceEngine};
use presence_model::{AttendanceStatus, Group};
use presence_store::{SqliteStore, Store};
use std::sync::Arc;

fn seeded_config() -> AppConfig {
    parse_config(
        r#"
        config_version = 1
        max_snapshots = 3

        [period]
        start = "2025-11-22"
        end = "2025-12-06"

        [[members]]
        id = "default-m-1"
        name = "AHMED YOUSSOUF AHMED"
        group = "matin"

        [[members]]
        id = "default-s-1"
        name = "ALI SAID"
        group = "soir"
    "#,
    )
    .unwrap()
}

#[test]
fn test_roster_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("presence.db");

    let jane_id = {
        let store = Arc::new(SqliteStore::open(&path).unwrap());
        let mut engine = PresenceEngine::new(seeded_config(), store).unwrap();

        let jane = engine.add_person("Jane Doe", Group::Morning).unwrap();
        engine
            .mark_attendance(&jane.id, "2025-11-22", Mark::Absent, None)
            .unwrap();
        jane.id
    };

    // Reopen: the seeded members and the mutation are all there
    let store = Arc::new(SqliteStore::open(&path).unwrap());
    let engine = PresenceEngine::new(seeded_config(), store).unwrap();

    assert_eq!(engine.people().len(), 3);
    let jane = engine.get_person(&jane_id).unwrap();
    assert_eq!(jane.status_on("2025-11-22"), AttendanceStatus::Absent);
    assert_eq!(
        jane.record("2025-11-22").unwrap().justification.as_deref(),
        Some("Maladie")
    );
}

#[test]
fn test_seeding_happens_only_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("presence.db");

    {
        let store = Arc::new(SqliteStore::open(&path).unwrap());
        let mut engine = PresenceEngine::new(seeded_config(), store).unwrap();
        // Empty the roster and persist that state
        for person in engine.people().to_vec() {
            engine.remove_person(&person.id).unwrap();
        }
        engine.create_snapshot(Some("emptied")).unwrap();
    }

    // An emptied roster reads as a fresh store, so the seed applies again;
    // snapshots are untouched either way
    let store = Arc::new(SqliteStore::open(&path).unwrap());
    let engine = PresenceEngine::new(seeded_config(), store.clone()).unwrap();
    assert_eq!(engine.people().len(), 2);
    assert_eq!(store.snapshot_count().unwrap(), 1);
}

#[test]
fn test_snapshot_lifecycle_with_configured_cap() {
    let store = Arc::new(SqliteStore::in_memory().unwrap());
    let mut engine = PresenceEngine::new(seeded_config(), store).unwrap();

    for i in 0..5 {
        engine.create_snapshot(Some(&format!("snap-{i}"))).unwrap();
    }

    // Cap is 3: the two oldest were evicted
    let names: Vec<String> = engine
        .list_snapshots()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, ["snap-4", "snap-3", "snap-2"]);

    // Restore the oldest survivor, which predates any mutation below
    let target = engine
        .list_snapshots()
        .into_iter()
        .find(|s| s.name == "snap-2")
        .unwrap();

    let ahmed = engine.people()[0].id.clone();
    engine
        .mark_attendance(&ahmed, "2025-11-25", Mark::Present, None)
        .unwrap();

    assert!(engine.restore_snapshot(target.id));
    assert_eq!(
        engine.get_person(&ahmed).unwrap().status_on("2025-11-25"),
        AttendanceStatus::Pending
    );
}

#[test]
fn test_failed_import_leaves_everything_recoverable() {
    let store = Arc::new(SqliteStore::in_memory().unwrap());
    let mut engine = PresenceEngine::new(seeded_config(), store).unwrap();

    assert!(!engine.import_roster("definitely not json"));
    assert_eq!(engine.people().len(), 2);
    // A rejected payload never reaches the snapshot step
    assert!(engine.list_snapshots().is_empty());

    let payload = r#"[{
        "id": "imported-1",
        "name": "FARAH ALALEH",
        "group": "Groupe Soir",
        "avatar": "",
        "attendance": {}
    }]"#;
    assert!(engine.import_roster(payload));
    assert_eq!(engine.people().len(), 1);

    // The pre-import snapshot restores the seeded roster
    let pre_import = engine
        .list_snapshots()
        .into_iter()
        .find(|s| s.name.starts_with("PRE-IMPORT-"))
        .unwrap();
    assert!(engine.restore_snapshot(pre_import.id));
    assert_eq!(engine.people().len(), 2);
}
