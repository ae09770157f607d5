//! Schema-validation issue mapping.
//!
//! Validators report a *list* of issues; one submission can violate several
//! fields at once, so mapping produces one [`MappedError`] per issue and
//! keeps the whole list available. The first issue is extracted as a
//! convenience for single-message surfaces.
//!
//! Issue codes are a small discriminated vocabulary (not free text), so this
//! mapper matches on them directly instead of carrying a substring rule
//! table.

use serde::Deserialize;
use serde_json::Value;

use super::MappedError;
use crate::codes::{ErrorCode, ValCode};

/// One raw issue from the schema validator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawValidationIssue {
    /// Path segments to the offending field, e.g. `["profile", "email"]`.
    #[serde(default)]
    pub path: Vec<Value>,
    /// Flat field name, used when `path` is absent.
    #[serde(default)]
    pub field: Option<String>,
    /// Validator issue code, e.g. `invalid_type`, `too_small`.
    #[serde(default)]
    pub code: Option<String>,
    /// Validator message; consulted only for discrimination, never displayed.
    #[serde(default)]
    pub message: Option<String>,
}

impl RawValidationIssue {
    pub fn new(code: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            path: Vec::new(),
            field: Some(field.into()),
            code: Some(code.into()),
            message: None,
        }
    }

    /// Dotted path to the offending field, when the validator supplied one.
    pub fn field_path(&self) -> Option<String> {
        if !self.path.is_empty() {
            let joined = self
                .path
                .iter()
                .map(|segment| match segment {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(".");
            return Some(joined);
        }
        self.field.clone()
    }
}

fn classify(issue: &RawValidationIssue) -> ValCode {
    let message = issue.message.as_deref().unwrap_or_default().to_lowercase();
    match issue.code.as_deref().unwrap_or_default() {
        // A missing field surfaces as invalid_type with a "required" message.
        "invalid_type" if message.contains("required") || message.contains("undefined") => {
            ValCode::RequiredMissing
        }
        "invalid_type" => ValCode::TypeMismatch,
        "too_small" => ValCode::TooShort,
        "too_big" => ValCode::TooLong,
        "not_finite" | "not_multiple_of" => ValCode::OutOfRange,
        "invalid_string" | "invalid_format" | "invalid_date" => ValCode::PatternMismatch,
        "invalid_enum_value" | "invalid_literal" | "invalid_union_discriminator" => {
            ValCode::InvalidChoice
        }
        _ => ValCode::Unknown,
    }
}

/// Maps one validation issue, prefixing the catalog message with the field
/// path when one exists (field names are API surface, safe to show).
pub fn map_validation_issue(issue: &RawValidationIssue) -> MappedError {
    let code = ErrorCode::Val(classify(issue));
    let mapped = MappedError::of(code);
    match issue.field_path() {
        Some(path) if !path.is_empty() => {
            let message = format!("{path}: {}", code.message());
            mapped.with_message(message)
        }
        _ => mapped,
    }
}

/// Maps every issue independently; the caller keeps field-level detail.
pub fn map_validation_issues(issues: &[RawValidationIssue]) -> Vec<MappedError> {
    issues.iter().map(map_validation_issue).collect()
}

/// The first mapped issue, for surfaces that show a single message. An empty
/// issue list means the body itself never parsed.
pub fn first_issue(issues: &[RawValidationIssue]) -> MappedError {
    issues
        .first()
        .map(map_validation_issue)
        .unwrap_or_else(malformed_body)
}

/// The whole-body failure: the request could not be decoded at all.
pub fn malformed_body() -> MappedError {
    MappedError::of(ErrorCode::Val(ValCode::MalformedBody))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn issue(code: &str, path: Vec<Value>, message: &str) -> RawValidationIssue {
        RawValidationIssue {
            path,
            field: None,
            code: Some(code.into()),
            message: Some(message.into()),
        }
    }

    #[test]
    fn one_mapped_error_per_issue() {
        let issues = vec![
            issue("invalid_type", vec![json!("email")], "Required"),
            issue("too_small", vec![json!("password")], "String must contain at least 8 character(s)"),
        ];
        let mapped = map_validation_issues(&issues);
        assert_eq!(mapped.len(), 2);
        assert_eq!(mapped[0].code, ErrorCode::Val(ValCode::RequiredMissing));
        assert_eq!(mapped[1].code, ErrorCode::Val(ValCode::TooShort));
    }

    #[test]
    fn field_paths_prefix_the_catalog_message() {
        let mapped = map_validation_issue(&issue(
            "invalid_type",
            vec![json!("profile"), json!("email")],
            "Required",
        ));
        assert_eq!(mapped.message, "profile.email: This field is required.");
        assert!(!mapped.retryable);
    }

    #[test]
    fn array_indices_join_into_the_path() {
        let mapped = map_validation_issue(&issue(
            "invalid_enum_value",
            vec![json!("questions"), json!(2), json!("kind")],
            "Invalid enum value",
        ));
        assert_eq!(
            mapped.message,
            "questions.2.kind: This value is not one of the allowed options."
        );
    }

    #[test]
    fn invalid_type_without_required_text_is_a_type_mismatch() {
        let mapped = map_validation_issue(&issue(
            "invalid_type",
            vec![json!("age")],
            "Expected number, received string",
        ));
        assert_eq!(mapped.code, ErrorCode::Val(ValCode::TypeMismatch));
    }

    #[test]
    fn raw_validator_text_is_never_displayed() {
        let mapped = map_validation_issue(&issue(
            "too_big",
            vec![json!("title")],
            "String must contain at most 200 character(s)",
        ));
        assert!(!mapped.message.contains("200 character"));
    }

    #[test]
    fn empty_issue_lists_mean_the_body_never_parsed() {
        let mapped = first_issue(&[]);
        assert_eq!(mapped.code, ErrorCode::Val(ValCode::MalformedBody));
        assert!(!mapped.retryable);
    }

    #[test]
    fn unknown_issue_codes_degrade_to_val_unknown() {
        let mapped = map_validation_issue(&issue("custom", vec![], "anything"));
        assert_eq!(mapped.code, ErrorCode::Val(ValCode::Unknown));
    }
}
