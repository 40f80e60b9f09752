//! # Weekplan Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Schedule generation (template catalog, pattern expansion, override
//!   merging)
//! - Rule validation and weekly aggregation
//! - Port interfaces (traits) for configuration sources and caching
//!
//! ## Architecture Principles
//! - Only depends on `weekplan-common` and `weekplan-domain`
//! - No file, network, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod schedule;

pub use schedule::ports::{ScheduleCache, ScheduleConfigSource};
pub use schedule::{
    aggregate_week, expand_pattern, merge_unique, summary_lines, ScheduleService,
    ScheduleValidator, TemplateCatalog, WeeklyPlan,
};
