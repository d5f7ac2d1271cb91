//! Test environment for running the nannymiles binary in isolation.
//!
//! Every `TestEnv` owns a temporary home directory. The binary sees it through
//! `NANNYMILES_TEST_HOME` (and `HOME`/`XDG_CONFIG_HOME`), so the default data
//! file and config file both land inside the temp dir.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Result of running a nannymiles command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as a single JSON document.
    pub fn json(&self) -> Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|e| {
            panic!(
                "stdout is not JSON ({e}):\n{}\nstderr:\n{}",
                self.stdout, self.stderr
            )
        })
    }

    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home_dir: TempDir::new().expect("Failed to create temp home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_nannymiles")),
        }
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Where the binary stores data when no override is given.
    pub fn data_file(&self) -> PathBuf {
        self.home_path(".nannymiles/data.json")
    }

    /// Run nannymiles with the isolated home.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run with `--json` appended and return the parsed stdout.
    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut all = args.to_vec();
        all.push("--json");
        let result = self.run(&all);
        assert!(
            result.success,
            "nannymiles {:?} failed:\n{}",
            args,
            result.combined_output()
        );
        result.json()
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.home_dir.path())
            .args(args)
            .with_test_home(self.home_dir.path())
            .env("NO_COLOR", "1")
            .env_remove("NANNYMILES_DATA_FILE")
            .env_remove("NANNYMILES_RATE_PER_MILE")
            .env_remove("NANNYMILES_HOST")
            .env_remove("NANNYMILES_PORT");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute nannymiles");
        output_to_result(output)
    }

    pub fn read_data(&self) -> Value {
        let raw = std::fs::read_to_string(self.data_file()).expect("data file missing");
        serde_json::from_str(&raw).expect("data file is not JSON")
    }

    pub fn write_home_file(&self, relative_path: &str, content: &str) {
        let full_path = self.home_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Point every home-derived path at `home`.
///
/// `dirs::home_dir()` ignores `HOME` on Windows, so the binary also honours
/// `NANNYMILES_TEST_HOME`.
pub trait TestHomeExt {
    fn with_test_home(&mut self, home: &Path) -> &mut Self;
}

impl TestHomeExt for Command {
    fn with_test_home(&mut self, home: &Path) -> &mut Self {
        self.env("HOME", home)
            .env("USERPROFILE", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("NANNYMILES_TEST_HOME", home)
    }
}
