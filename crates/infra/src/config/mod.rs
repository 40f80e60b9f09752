//! Configuration loading
//!
//! This module provides utilities for loading the schedule configuration
//! from files named directly, through the environment, or found by probing.

pub mod loader;

// Re-export commonly used items
pub use loader::{
    load, load_from_env, load_from_file, probe_config_paths, FileConfigSource, CONFIG_PATH_ENV,
};
