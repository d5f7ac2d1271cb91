//! Failure reporting: exit status, stderr text and `--json` error objects.

use crate::common::*;

#[test]
fn contract_validation_error_exits_non_zero_and_names_field() {
    let env = TestEnv::new();

    let result = env.run(&[
        "trip", "add", "--date", "2024-03-20", "--origin", "Home", "--destination", "Park",
        "--miles", "0",
    ]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("miles must be a positive number"), "{}", result.stderr);
    assert!(!env.data_file().exists());
}

#[test]
fn contract_invalid_date_is_rejected() {
    let env = TestEnv::new();

    let result = env.run(&[
        "expense", "add", "--date", "03/20/2024", "--amount", "4", "-d", "Snack",
    ]);

    assert!(!result.success);
    assert!(result.stderr.contains("invalid date '03/20/2024'"), "{}", result.stderr);
}

#[test]
fn contract_json_errors_go_to_stdout_as_object() {
    let env = TestEnv::new();

    let result = env.run(&["trip", "delete", "3", "--json"]);

    assert!(!result.success);
    let body = result.json();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("trip index 3 is out of range"), "{message}");
}

#[test]
fn contract_out_of_range_suggests_list_command() {
    let env = TestEnv::new();

    let result = env.run(&["expense", "edit", "0", "--amount", "4"]);

    assert!(!result.success);
    assert!(result.stderr.contains("nannymiles expense list"), "{}", result.stderr);
}

#[test]
fn contract_corrupted_file_is_reported_and_left_untouched() {
    let env = TestEnv::new();
    env.write_home_file(".nannymiles/data.json", "{ not json");

    let result = env.run(&[
        "expense", "add", "--date", "2024-03-20", "--amount", "4", "-d", "Snack",
    ]);

    assert!(!result.success);
    assert!(result.stderr.contains("data file corrupted"), "{}", result.stderr);
    assert_eq!(
        std::fs::read_to_string(env.data_file()).unwrap(),
        "{ not json"
    );
}

#[test]
fn contract_unknown_template_is_not_found() {
    let env = TestEnv::new();

    let result = env.run(&["trip", "add", "--template", "Nowhere", "--miles", "3"]);

    assert!(!result.success);
    assert!(result.stderr.contains("no trip template named 'Nowhere'"), "{}", result.stderr);
}

#[test]
fn contract_bad_reference_is_rejected() {
    let env = TestEnv::new();

    let result = env.run(&["trip", "delete", "first"]);

    assert!(!result.success);
    assert!(result.stderr.contains("invalid record reference 'first'"), "{}", result.stderr);
}
