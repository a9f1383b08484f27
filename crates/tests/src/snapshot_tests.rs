//! Snapshot save / load across all three boards

use pretty_assertions::assert_eq;
use shared_types::{seed, AppErrorKind, Snapshot, SNAPSHOT_VERSION};

use crate::common::{draft, noon};

#[test]
fn seeded_snapshot_matches_seed_boards() {
    let snapshot = Snapshot::seeded();
    assert_eq!(snapshot.version, SNAPSHOT_VERSION);
    assert_eq!(snapshot.donor, seed::donor_board());
    assert_eq!(snapshot.volunteer, seed::volunteer_board());
    assert_eq!(snapshot.admin, seed::admin_overview());
}

#[test]
fn mutated_state_survives_save_and_load() {
    let mut snapshot = Snapshot::seeded();
    snapshot
        .donor
        .post_request(&draft("Idli", "40 pieces", "Jayanagar"), noon())
        .unwrap();
    snapshot.volunteer.accept("1");
    snapshot.volunteer.complete("3");

    let json = snapshot.to_json().unwrap();
    let loaded = Snapshot::from_json(&json).unwrap();

    assert_eq!(loaded, snapshot);
    assert_eq!(loaded.donor.all()[0].quantity.to_string(), "40 pieces");
    assert_eq!(loaded.volunteer.completed().len(), 1);
}

#[test]
fn quantities_are_stored_as_text() {
    let json = Snapshot::seeded().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["admin"]["requests"][1]["quantity"], "100 servings");
    assert_eq!(value["volunteer"]["tasks"][2]["status"], "accepted");
}

#[test]
fn malformed_json_is_a_bad_request() {
    let err = Snapshot::from_json("{ not json").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(err.message.starts_with("Malformed snapshot"));
}

#[test]
fn future_version_is_rejected() {
    let mut value: serde_json::Value =
        serde_json::from_str(&Snapshot::seeded().to_json().unwrap()).unwrap();
    value["version"] = serde_json::json!(SNAPSHOT_VERSION + 1);

    let err = Snapshot::from_json(&value.to_string()).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "unsupported snapshot version 2");
}
