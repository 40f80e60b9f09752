//! Rule violations reported by schedule validation

use std::fmt;

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::types::Weekday;

/// A single daily rule that a generated day breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum RuleViolation {
    /// Less study time than the configured minimum
    InsufficientStudy { actual: u32, minimum: u32 },
    /// More work time than the configured maximum
    ExcessiveWork { actual: u32, maximum: u32 },
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientStudy { actual, minimum } => {
                write!(f, "insufficient study time ({actual} of {minimum} minutes)")
            }
            Self::ExcessiveWork { actual, maximum } => {
                write!(f, "excessive work time ({actual} minutes, limit {maximum})")
            }
        }
    }
}

/// A violation attributed to a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ValidationWarning {
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub day: Weekday,
    pub violation: RuleViolation,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.day, self.violation)
    }
}

/// Outcome of validating a week. Warnings never block generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ValidationReport {
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// No rule was broken
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Record a violation for `day`
    pub fn push(&mut self, day: Weekday, violation: RuleViolation) {
        self.warnings.push(ValidationWarning { day, violation });
    }

    /// Warnings raised for one day
    pub fn for_day(&self, day: Weekday) -> impl Iterator<Item = &ValidationWarning> + '_ {
        self.warnings.iter().filter(move |warning| warning.day == day)
    }
}
