//! Integration tests for the export/import bridge
//!
//! Exercises the bridge against a live engine: sheet generation from real
//! roster state, and the JSON export feeding back into `import_roster`.

use presence_config::AppConfig;
use presence_core::{Mark, PresenceEngine};
use presence_export::{build_table, export_json, to_xlsx};
use presence_model::Group;
use presence_store::SqliteStore;
use std::sync::Arc;

fn engine_with_data() -> PresenceEngine {
    let store = Arc::new(SqliteStore::in_memory().unwrap());
    let mut engine = PresenceEngine::new(AppConfig::default(), store).unwrap();

    let ahmed = engine.add_person("Ahmed Youssouf Ahmed", Group::Morning).unwrap();
    let ali = engine.add_person("Ali Said", Group::Evening).unwrap();

    engine
        .mark_attendance(&ahmed.id, "2025-11-22", Mark::Present, None)
        .unwrap();
    engine
        .mark_attendance(&ahmed.id, "2025-11-23", Mark::Absent, Some("Retard".into()))
        .unwrap();
    engine
        .mark_attendance(&ali.id, "2025-11-22", Mark::Absent, None)
        .unwrap();

    engine
}

#[test]
fn test_sheet_reflects_the_roster() {
    let engine = engine_with_data();
    let table = build_table(engine.people(), engine.calendar());

    // Name, group, 15 tracked days, total, rate
    assert_eq!(table.headers.len(), 19);
    assert_eq!(table.rows.len(), 2);

    let ahmed = &table.rows[0];
    assert_eq!(ahmed[0], "AHMED YOUSSOUF AHMED");
    assert_eq!(ahmed[2], "PRÉSENT");
    assert_eq!(ahmed[3], "ABSENT (Retard)");
    assert_eq!(ahmed[17], "1 / 15");
    assert_eq!(ahmed[18], "7%");

    let ali = &table.rows[1];
    // Default justification was applied on the fresh absence
    assert_eq!(ali[2], "ABSENT (Maladie)");

    let bytes = to_xlsx(&table).unwrap();
    assert!(!bytes.is_empty());
}

#[test]
fn test_json_export_imports_back_losslessly() {
    let mut engine = engine_with_data();
    let before = engine.people().to_vec();

    let json = export_json(engine.people()).unwrap();

    // Diverge, then re-import the export
    let ali = before[1].id.clone();
    engine.remove_person(&ali).unwrap();
    assert_eq!(engine.people().len(), 1);

    assert!(engine.import_roster(&json));
    assert_eq!(engine.people(), before.as_slice());
}
