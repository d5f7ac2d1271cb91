//! A week of driving and expenses, then asking what is owed.

use crate::common::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn scenario_week_of_trips_and_expenses() {
    let env = TestEnv::new();

    // Sunday to Saturday, plus one trip in the following week.
    for (date, miles, kind) in [
        ("2024-03-17", "4", "round"),
        ("2024-03-19", "10", "single"),
        ("2024-03-23", "3", "round"),
        ("2024-03-24", "7", "single"),
    ] {
        env.run_json(&[
            "trip", "add", "--date", date, "--origin", "Home", "--destination", "School",
            "--miles", miles, "--type", kind,
        ]);
    }
    env.run_json(&["expense", "add", "--date", "2024-03-20", "--amount", "12.5", "-d", "Zoo"]);

    let week = env.run_json(&["summary", "--week", "2024-03-21"]);
    assert_eq!(week["WeekStart"], "2024-03-17");
    assert_eq!(week["WeekEnd"], "2024-03-23");
    assert_eq!(week["Trips"].as_array().unwrap().len(), 3);
    assert_eq!(week["Expenses"].as_array().unwrap().len(), 1);
    // 4*2 + 10 + 3*2
    assert!(close(week["TotalMiles"].as_f64().unwrap(), 24.0), "{week}");
    assert!(close(week["TotalAmount"].as_f64().unwrap(), 24.0 * 0.70), "{week}");
    assert!(close(week["TotalExpenses"].as_f64().unwrap(), 12.5), "{week}");

    let next = env.run_json(&["summary", "--week", "2024-03-24"]);
    assert!(close(next["TotalMiles"].as_f64().unwrap(), 7.0), "{next}");

    let totals = env.run_json(&["totals"]);
    assert_eq!(totals["trip_count"], 4);
    assert!(close(totals["total_miles"].as_f64().unwrap(), 31.0), "{totals}");
}

#[test]
fn scenario_rate_change_applies_to_reports_and_recalculate() {
    let env = TestEnv::new();
    env.run_json(&[
        "trip", "add", "--date", "2024-03-19", "--origin", "Home", "--destination", "Pool",
        "--miles", "10",
    ]);
    let stored = env.read_data()["weekly_summaries"][0]["TotalAmount"]
        .as_f64()
        .unwrap();
    assert!(close(stored, 7.0));

    // Reports use the current rate immediately.
    let week = env.run_json(&["summary", "--week", "2024-03-19", "--rate", "0.5"]);
    assert!(close(week["TotalAmount"].as_f64().unwrap(), 5.0), "{week}");
    // The stored copy changes only after recalculating.
    let stored = env.read_data()["weekly_summaries"][0]["TotalAmount"]
        .as_f64()
        .unwrap();
    assert!(close(stored, 7.0));

    env.run_json(&["recalculate", "--rate", "0.5"]);
    let stored = env.read_data()["weekly_summaries"][0]["TotalAmount"]
        .as_f64()
        .unwrap();
    assert!(close(stored, 5.0));
}

#[test]
fn scenario_text_summary_is_readable() {
    let env = TestEnv::new();
    env.run_json(&["expense", "add", "--date", "2024-03-20", "--amount", "7", "-d", "Snacks"]);

    let result = env.run(&["summary"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Week of 2024-03-17 to 2024-03-23"), "{}", result.stdout);
    assert!(result.stdout.contains("$7.00"), "{}", result.stdout);
}
