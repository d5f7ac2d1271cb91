//! Saving a route once and logging trips from it.

use crate::common::*;

#[test]
fn scenario_log_trips_from_template_by_name() {
    let env = TestEnv::new();

    let template = env.run_json(&[
        "template", "add", "--name", "School run", "--origin", "Home", "--destination",
        "Elm Street Elementary", "--type", "round", "--notes", "Mon-Fri",
    ]);
    assert_eq!(template["tripType"], "round");
    assert_eq!(template["notes"], "Mon-Fri");

    for date in ["2024-03-18", "2024-03-19"] {
        let trip = env.run_json(&[
            "trip", "add", "--template", "school RUN", "--date", date, "--miles", "3",
        ]);
        assert_eq!(trip["destination"], "Elm Street Elementary");
        assert_eq!(trip["type"], "round");
    }

    let totals = env.run_json(&["totals"]);
    assert_eq!(totals["trip_count"], 2);
    assert_eq!(totals["total_miles"], 12.0);
}

#[test]
fn scenario_template_by_position_and_id() {
    let env = TestEnv::new();
    let template = env.run_json(&[
        "template", "add", "--name", "Park", "--origin", "Home", "--destination", "Park",
    ]);
    let id = template["id"].as_str().unwrap().to_string();

    let by_index = env.run_json(&["trip", "add", "--template", "0", "--date", "2024-03-18", "--miles", "2"]);
    let by_id = env.run_json(&["trip", "add", "--template", &id, "--date", "2024-03-18", "--miles", "2"]);

    assert_eq!(by_index["destination"], "Park");
    assert_eq!(by_id["destination"], "Park");
    assert_eq!(by_id["type"], "single");
}

#[test]
fn scenario_edit_and_delete_template() {
    let env = TestEnv::new();
    env.run_json(&[
        "template", "add", "--name", "Library", "--origin", "Home", "--destination", "Library",
        "--notes", "Tuesdays",
    ]);

    let edited = env.run_json(&["template", "edit", "0", "--type", "round", "--notes", ""]);
    assert_eq!(edited["tripType"], "round");
    assert!(edited.get("notes").map_or(true, |n| n.is_null()), "{edited}");
    assert_eq!(edited["name"], "Library");

    env.run_json(&["template", "delete", "0"]);
    assert!(env.run_json(&["template", "list"]).as_array().unwrap().is_empty());
}
