//! # Weekplan Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Configuration file loading (TOML/JSON)
//! - The memoizing plan cache (moka)
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `weekplan-core`
//! - Contains all "impure" code (file I/O, environment, global subscribers)

pub mod cache;
pub mod config;
pub mod observability;

// Re-export commonly used items
pub use cache::{config_fingerprint, MokaScheduleCache, ScheduleCacheConfig};
pub use config::{load, load_from_env, load_from_file, probe_config_paths, FileConfigSource};
pub use observability::init_tracing;
