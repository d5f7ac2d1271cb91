//! Data file layout.

use crate::common::*;

fn add_trip(env: &TestEnv, date: &str, miles: &str, kind: &str) {
    env.run_json(&[
        "trip", "add", "--date", date, "--origin", "Home", "--destination", "School",
        "--miles", miles, "--type", kind,
    ]);
}

#[test]
fn contract_data_file_is_created_under_home_on_first_write() {
    let env = TestEnv::new();
    assert!(!env.data_file().exists());

    add_trip(&env, "2024-03-20", "10", "single");

    assert!(env.data_file().exists());
}

#[test]
fn contract_data_file_has_four_top_level_collections() {
    let env = TestEnv::new();
    add_trip(&env, "2024-03-20", "10", "single");

    let data = env.read_data();
    for key in ["trips", "expenses", "weekly_summaries", "trip_templates"] {
        assert!(data[key].is_array(), "missing {key} in {data}");
    }
}

#[test]
fn contract_trip_records_use_type_key() {
    let env = TestEnv::new();
    add_trip(&env, "2024-03-20", "2.5", "round");

    let trip = &env.read_data()["trips"][0];
    assert_eq!(trip["type"], "round");
    assert_eq!(trip["date"], "2024-03-20");
    assert_eq!(trip["miles"], 2.5);
    assert!(trip["id"].is_string());
}

#[test]
fn contract_weekly_summaries_are_stored_after_each_write() {
    let env = TestEnv::new();
    add_trip(&env, "2024-03-20", "10", "single");
    add_trip(&env, "2024-03-27", "5", "round");

    let summaries = env.read_data()["weekly_summaries"].clone();
    let summaries = summaries.as_array().unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0]["WeekStart"], "2024-03-17");
    assert_eq!(summaries[0]["WeekEnd"], "2024-03-23");
    assert_eq!(summaries[0]["TotalMiles"], 10.0);
    assert_eq!(summaries[1]["WeekStart"], "2024-03-24");
    assert_eq!(summaries[1]["TotalMiles"], 10.0);
}

#[test]
fn contract_data_file_flag_overrides_default_location() {
    let env = TestEnv::new();
    let custom = env.home_path("elsewhere/ledger.json");
    let custom_arg = custom.display().to_string();

    env.run_json(&[
        "expense", "add", "--date", "2024-03-20", "--amount", "12.5", "-d", "Lunch",
        "--data-file", &custom_arg,
    ]);

    assert!(custom.exists());
    assert!(!env.data_file().exists());
}

#[test]
fn contract_hand_written_file_without_ids_loads() {
    let env = TestEnv::new();
    env.write_home_file(
        ".nannymiles/data.json",
        r#"{"trips":[{"date":"2024-03-20","origin":"Home","destination":"Park","miles":3,"type":"single"}],"expenses":null}"#,
    );

    let trips = env.run_json(&["trip", "list"]);

    assert_eq!(trips.as_array().unwrap().len(), 1);
    assert_eq!(trips[0]["index"], 0);
    assert_eq!(trips[0]["destination"], "Park");
}
