//! Config file, environment and flag precedence.

use crate::common::*;

fn rate_of(env: &TestEnv, args: &[&str], vars: &[(&str, &str)]) -> f64 {
    let mut all = args.to_vec();
    all.extend(["totals", "--json"]);
    let result = env.run_with_env(&all, vars);
    assert!(result.success, "{}", result.combined_output());
    result.json()["rate_per_mile"].as_f64().unwrap()
}

#[test]
fn contract_default_rate_is_seventy_cents() {
    let env = TestEnv::new();
    assert_eq!(rate_of(&env, &[], &[]), 0.70);
}

#[test]
fn contract_config_file_sets_rate() {
    let env = TestEnv::new();
    env.write_home_file(
        ".config/nannymiles/config.toml",
        "[reimbursement]\nrate_per_mile = 0.655\n",
    );

    assert_eq!(rate_of(&env, &[], &[]), 0.655);
}

#[test]
fn contract_env_overrides_config_file() {
    let env = TestEnv::new();
    env.write_home_file(
        ".config/nannymiles/config.toml",
        "[reimbursement]\nrate_per_mile = 0.655\n",
    );

    let rate = rate_of(&env, &[], &[("NANNYMILES_RATE_PER_MILE", "0.6")]);
    assert_eq!(rate, 0.6);
}

#[test]
fn contract_flag_overrides_env() {
    let env = TestEnv::new();

    let rate = rate_of(&env, &["--rate", "0.5"], &[("NANNYMILES_RATE_PER_MILE", "0.6")]);
    assert_eq!(rate, 0.5);
}

#[test]
fn contract_explicit_config_path_is_used() {
    let env = TestEnv::new();
    env.write_home_file("custom.toml", "[reimbursement]\nrate_per_mile = 0.4\n");
    let path = env.home_path("custom.toml").display().to_string();

    assert_eq!(rate_of(&env, &["--config", &path], &[]), 0.4);
}

#[test]
fn contract_config_storage_path_moves_data_file() {
    let env = TestEnv::new();
    let target = env.home_path("ledger/data.json");
    env.write_home_file(
        ".config/nannymiles/config.toml",
        &format!("[storage]\npath = {:?}\n", target.display().to_string()),
    );

    env.run_json(&["expense", "add", "--date", "2024-03-20", "--amount", "2", "-d", "Snack"]);

    assert!(target.exists());
    assert!(!env.data_file().exists());
}

#[test]
fn contract_unknown_config_key_warns_with_suggestion() {
    let env = TestEnv::new();
    env.write_home_file(
        ".config/nannymiles/config.toml",
        "[reimbursement]\nrate_per_mil = 0.5\n",
    );

    let result = env.run(&["totals"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("rate_per_mil"), "{}", result.stderr);
    assert!(result.stderr.contains("did you mean 'rate_per_mile'"), "{}", result.stderr);
}

#[test]
fn contract_non_positive_rate_is_rejected() {
    let env = TestEnv::new();

    let result = env.run(&["totals", "--rate", "0"]);

    assert!(!result.success);
}
