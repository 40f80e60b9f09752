//! # Weekplan Domain
//!
//! Business domain types and models for weekplan.
//!
//! This crate contains:
//! - Domain data types (Activity, WeekSchedule, WeeklyStats, etc.)
//! - Time-of-day arithmetic
//! - Domain error types and Result definitions
//! - The schedule configuration document
//! - Domain constants
//!
//! ## Architecture
//! - Depends only on the foundation tier of `weekplan-common`
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
// Re-export time arithmetic
pub use utils::time_of_day::{duration_minutes, minutes_to_time, span_minutes, time_to_minutes};
