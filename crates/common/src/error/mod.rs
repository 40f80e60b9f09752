//! Loader-level errors and severity classification
//!
//! [`CommonError`] describes what can go wrong between a configuration file
//! on disk and a parsed document: the file cannot be read, its text does not
//! decode, or the document names something the loader does not support.
//! The domain error converts *from* it, so loaders can build a precise
//! message here and hand callers a single error type.
//!
//! [`ErrorClassification`] gives both error types one severity scale, which
//! [`log_error`] uses to pick a `tracing` level.
//!
//! | Level | Logged as | Produced by |
//! |-------|-----------|-------------|
//! | **Info** | `debug!` | expected absences |
//! | **Warning** | `warn!` | degraded but usable results |
//! | **Error** | `error!` | unreadable or malformed configuration |
//! | **Critical** | `error!` + `critical = true` | broken internal invariants |

use std::fmt;

use thiserror::Error;

/// Result alias for loader-level operations
pub type CommonResult<T> = Result<T, CommonError>;

/// Failures raised while reading and decoding a configuration document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommonError {
    /// The document is well-formed but names an unsupported setting
    #[error("Configuration error in field '{field}': {message}")]
    Config { field: String, message: String },

    /// The document text does not decode in the given format
    #[error("Serialization error ({format}): {message}")]
    Serialization { format: String, message: String },

    /// The document could not be read or written
    #[error("Persistence error during '{operation}': {message}")]
    Persistence { operation: String, message: String },
}

impl CommonError {
    /// Unsupported value in the named configuration field
    pub fn config_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config { field: field.into(), message: message.into() }
    }

    /// Decoding failure in `format` (`"TOML"`, `"JSON"`)
    pub fn serialization_format(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization { format: format.into(), message: message.into() }
    }

    /// I/O failure during `operation`
    pub fn persistence_op(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Persistence { operation: operation.into(), message: message.into() }
    }
}

impl ErrorClassification for CommonError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }
}

/// Severity scale shared by every weekplan error type
pub trait ErrorClassification {
    /// How loudly the failure should be reported
    fn severity(&self) -> ErrorSeverity;

    /// Whether the failure points at a broken invariant rather than bad input
    fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }
}

/// Error severity levels, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        })
    }
}

impl From<serde_json::Error> for CommonError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization_format("JSON", err.to_string())
    }
}

impl From<toml::de::Error> for CommonError {
    fn from(err: toml::de::Error) -> Self {
        Self::serialization_format("TOML", err.to_string())
    }
}

/// Emit a `tracing` event for `err` at a level derived from its severity
///
/// `Info` maps to `debug!`, `Warning` to `warn!`, and both `Error` and
/// `Critical` to `error!`.
#[cfg(feature = "observability")]
pub fn log_error<E>(err: &E, context: &str)
where
    E: ErrorClassification + fmt::Display,
{
    let severity = err.severity();
    match severity {
        ErrorSeverity::Info => tracing::debug!(%severity, error = %err, "{context}"),
        ErrorSeverity::Warning => tracing::warn!(%severity, error = %err, "{context}"),
        ErrorSeverity::Error | ErrorSeverity::Critical => {
            tracing::error!(%severity, error = %err, critical = err.is_critical(), "{context}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_their_context() {
        let err = CommonError::config_field("extension", "Unsupported config format: yaml");
        assert_eq!(
            err.to_string(),
            "Configuration error in field 'extension': Unsupported config format: yaml"
        );

        let err = CommonError::persistence_op("read", "permission denied");
        assert_eq!(err.to_string(), "Persistence error during 'read': permission denied");
    }

    #[test]
    fn test_loader_errors_are_not_critical() {
        let err = CommonError::serialization_format("TOML", "expected `=`");
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert!(!err.is_critical());
    }

    #[test]
    fn test_severity_ordering_and_display() {
        assert!(ErrorSeverity::Info < ErrorSeverity::Warning);
        assert!(ErrorSeverity::Error < ErrorSeverity::Critical);
        assert_eq!(ErrorSeverity::Critical.to_string(), "CRITICAL");
    }

    #[test]
    fn test_from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: CommonError = toml_err.into();
        assert!(matches!(err, CommonError::Serialization { ref format, .. } if format == "TOML"));
    }
}
