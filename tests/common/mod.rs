#![allow(dead_code)]

//! Common test utilities for nannymiles CLI tests.
//!
//! - `TestEnv`: isolated home directory and data file, plus helpers to run
//!   the binary against them

pub mod env;

pub use env::*;
