//! Time utilities
//!
//! - **[`format`]**: human-readable formatting of minute totals
//!
//! ## Usage
//!
//! ```rust
//! # #[cfg(feature = "foundation")]
//! # {
//! use weekplan_common::time::{format_minutes, format_minutes_as_hours};
//!
//! assert_eq!(format_minutes(90), "1h 30m");
//! assert_eq!(format_minutes_as_hours(450), "7.5 hours");
//! # }
//! ```

pub mod format;

// Re-export commonly used items
pub use format::{format_minutes, format_minutes_as_hours};
