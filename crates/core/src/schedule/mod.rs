//! Weekly schedule generation
//!
//! Generation runs in four stages per configured day: resolve the day's
//! pattern, expand it through the template catalog, overlay the day's
//! unique activities, then validate and aggregate the finished week.

pub mod aggregator;
pub mod catalog;
pub mod expander;
pub mod merger;
pub mod ports;
pub mod service;
pub mod validator;

pub use aggregator::{aggregate_week, summary_lines, utilization_percentage, weighted_minutes};
pub use catalog::TemplateCatalog;
pub use expander::expand_pattern;
pub use merger::{merge_unique, resolve_location};
pub use ports::*;
pub use service::{ScheduleService, WeeklyPlan};
pub use validator::ScheduleValidator;
