//! Integration tests for `weekplan_common::error`.

use weekplan_common::error::{CommonError, CommonResult, ErrorClassification, ErrorSeverity};

#[test]
fn json_errors_convert_to_serialization() {
    let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
    let err: CommonError = parse.unwrap_err().into();
    assert!(err.to_string().starts_with("Serialization error (JSON):"));
    assert_eq!(err.severity(), ErrorSeverity::Error);
}

#[test]
fn toml_errors_convert_to_serialization() {
    let parse: Result<toml::Table, _> = toml::from_str("key = ");
    let err: CommonError = parse.unwrap_err().into();
    assert!(err.to_string().starts_with("Serialization error (TOML):"));
}

#[test]
fn question_mark_propagates_common_results() {
    fn read_rules(text: &str) -> CommonResult<serde_json::Value> {
        Ok(serde_json::from_str(text)?)
    }

    assert!(read_rules(r#"{"min_study_time": 120}"#).is_ok());
    assert!(matches!(read_rules("[1,"), Err(CommonError::Serialization { .. })));
}

#[test]
fn custom_classifications_drive_criticality() {
    struct Broken;

    impl ErrorClassification for Broken {
        fn severity(&self) -> ErrorSeverity {
            ErrorSeverity::Critical
        }
    }

    assert!(Broken.is_critical());
    assert!(!CommonError::persistence_op("read", "disk gone").is_critical());
}
