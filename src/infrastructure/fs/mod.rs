//! File System Helpers
//!
//! Local disk operations used by the repositories.

mod home;
mod local;

pub use home::{
    default_config_file, default_data_file, nannymiles_home_dir, NANNYMILES_TEST_HOME_VAR,
};
pub use local::{atomic_write, lock_path_for, read_if_exists, LockFile};
