//! Domain utilities

pub mod time_of_day;
