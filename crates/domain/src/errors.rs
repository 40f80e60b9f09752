//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;
use weekplan_common::{CommonError, ErrorClassification, ErrorSeverity};

use crate::types::Weekday;

/// Main error type for weekplan
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum WeekplanError {
    /// Malformed time-of-day text
    #[error("Invalid time format '{input}': {reason}")]
    Format { input: String, reason: String },

    /// A pattern block names a template the catalog does not define
    #[error("Unknown activity template '{key}' referenced by pattern '{pattern}'")]
    UnknownTemplate { pattern: String, key: String },

    /// A day binds a pattern name that is not defined
    #[error("Unknown day pattern '{pattern}' referenced by {day}")]
    UnknownPattern { day: Weekday, pattern: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl WeekplanError {
    /// Create a format error for the given input text
    pub fn format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format { input: input.into(), reason: reason.into() }
    }

    /// Whether this error comes from the configuration rather than from
    /// malformed time text
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::UnknownTemplate { .. } | Self::UnknownPattern { .. } | Self::Config(_))
    }
}

impl ErrorClassification for WeekplanError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Internal(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Loader failures surface as configuration errors
impl From<CommonError> for WeekplanError {
    fn from(err: CommonError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for weekplan operations
pub type Result<T> = std::result::Result<T, WeekplanError>;
