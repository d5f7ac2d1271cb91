//! `--json` output shapes.

use crate::common::*;

fn approx(value: &serde_json::Value, expected: f64) -> bool {
    value
        .as_f64()
        .map(|v| (v - expected).abs() < 1e-9)
        .unwrap_or(false)
}

#[test]
fn contract_add_prints_stored_record() {
    let env = TestEnv::new();

    let trip = env.run_json(&[
        "trip", "add", "--date", "2024-03-20", "--origin", "Home", "--destination", "School",
        "--miles", "4",
    ]);

    assert_eq!(trip["origin"], "Home");
    assert_eq!(trip["type"], "single");
    assert_eq!(
        trip["id"].as_str().unwrap(),
        env.read_data()["trips"][0]["id"].as_str().unwrap()
    );
}

#[test]
fn contract_list_includes_position_and_id() {
    let env = TestEnv::new();
    env.run_json(&["expense", "add", "--date", "2024-03-20", "--amount", "5", "-d", "Snack"]);
    env.run_json(&["expense", "add", "--date", "2024-03-21", "--amount", "7", "-d", "Museum"]);

    let listed = env.run_json(&["expense", "list"]);
    let listed = listed.as_array().unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[1]["index"], 1);
    assert_eq!(listed[1]["description"], "Museum");
    assert!(listed[1]["id"].is_string());
}

#[test]
fn contract_totals_report_counts_and_money() {
    let env = TestEnv::new();
    env.run_json(&[
        "trip", "add", "--date", "2024-03-20", "--origin", "Home", "--destination", "Park",
        "--miles", "5", "--type", "round",
    ]);
    env.run_json(&["expense", "add", "--date", "2024-03-20", "--amount", "3.5", "-d", "Snack"]);

    let totals = env.run_json(&["totals", "--rate", "0.5"]);

    assert_eq!(totals["trip_count"], 1);
    assert_eq!(totals["expense_count"], 1);
    assert!(approx(&totals["total_miles"], 10.0), "{totals}");
    assert!(approx(&totals["reimbursement"], 5.0), "{totals}");
    assert!(approx(&totals["total_expenses"], 3.5), "{totals}");
    assert!(approx(&totals["rate_per_mile"], 0.5), "{totals}");
}

#[test]
fn contract_summary_for_empty_week_is_null() {
    let env = TestEnv::new();

    let summary = env.run_json(&["summary", "--week", "2024-03-20"]);

    assert!(summary.is_null());
}

#[test]
fn contract_summary_lists_weeks_oldest_first() {
    let env = TestEnv::new();
    env.run_json(&["expense", "add", "--date", "2024-04-02", "--amount", "1", "-d", "Late"]);
    env.run_json(&["expense", "add", "--date", "2024-03-18", "--amount", "2", "-d", "Early"]);

    let summaries = env.run_json(&["summary"]);

    assert_eq!(summaries[0]["WeekStart"], "2024-03-17");
    assert_eq!(summaries[1]["WeekStart"], "2024-03-31");
}

#[test]
fn contract_recalculate_reports_weeks_and_rate() {
    let env = TestEnv::new();
    env.run_json(&["expense", "add", "--date", "2024-03-20", "--amount", "1", "-d", "Snack"]);

    let result = env.run_json(&["recalculate", "--rate", "0.65"]);

    assert_eq!(result["weeks"], 1);
    assert!(approx(&result["rate_per_mile"], 0.65));
}
