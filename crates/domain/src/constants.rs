//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Clock arithmetic
pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = 1440;
pub const DAYS_PER_WEEK: usize = 7;
pub const MINUTES_PER_WEEK: u32 = 10_080;

// Half of each meal is counted toward the weekly meals total
pub const MEALS_WEIGHT_DIVISOR: u32 = 2;

// Activity categories
pub const CATEGORY_COUNT: usize = 9;

// Compact "start-end" range notation used by override activities
pub const TIME_RANGE_SEPARATOR: char = '-';
