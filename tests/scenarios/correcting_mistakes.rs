//! Fixing a wrongly logged trip or expense.

use crate::common::*;

#[test]
fn scenario_edit_keeps_unspecified_fields_and_id() {
    let env = TestEnv::new();
    let original = env.run_json(&[
        "trip", "add", "--date", "2024-03-20", "--origin", "Home", "--destination", "Park",
        "--miles", "3",
    ]);

    let edited = env.run_json(&["trip", "edit", "0", "--miles", "4.5", "--type", "round"]);

    assert_eq!(edited["id"], original["id"]);
    assert_eq!(edited["origin"], "Home");
    assert_eq!(edited["destination"], "Park");
    assert_eq!(edited["miles"], 4.5);
    assert_eq!(edited["type"], "round");
    assert_eq!(env.read_data()["weekly_summaries"][0]["TotalMiles"], 9.0);
}

#[test]
fn scenario_delete_by_id_survives_position_shift() {
    let env = TestEnv::new();
    let first = env.run_json(&["expense", "add", "--date", "2024-03-18", "--amount", "1", "-d", "A"]);
    let second = env.run_json(&["expense", "add", "--date", "2024-03-19", "--amount", "2", "-d", "B"]);

    env.run_json(&["expense", "delete", first["id"].as_str().unwrap()]);
    // "B" now sits at position 0 but is still reachable by its id.
    let removed = env.run_json(&["expense", "delete", second["id"].as_str().unwrap()]);

    assert_eq!(removed["description"], "B");
    assert!(env.read_data()["expenses"].as_array().unwrap().is_empty());
    assert!(env.read_data()["weekly_summaries"].as_array().unwrap().is_empty());
}

#[test]
fn scenario_failed_edit_changes_nothing() {
    let env = TestEnv::new();
    env.run_json(&[
        "trip", "add", "--date", "2024-03-20", "--origin", "Home", "--destination", "Park",
        "--miles", "3",
    ]);
    let before = std::fs::read_to_string(env.data_file()).unwrap();

    let result = env.run(&["trip", "edit", "0", "--date", "2024-02-30"]);

    assert!(!result.success);
    assert_eq!(std::fs::read_to_string(env.data_file()).unwrap(), before);
}
