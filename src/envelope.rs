//! Canonical API response envelopes.
//!
//! Every endpoint answers with exactly one of two shapes, discriminated by
//! the `success` boolean and nothing else:
//!
//! ```json
//! {"success": false, "error": {"code": "FL-AI-002", "message": "...", "retryable": true}}
//! {"success": true, "data": {...}}
//! ```
//!
//! Building the envelope is pure value construction; writing it to the
//! transport (and using [`ApiErrorResponse::status`] for the status line) is
//! the caller's job.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codes::ErrorCode;

/// The `error` object of a failure envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDetail {
    pub code: ErrorCode,
    pub message: String,
    pub retryable: bool,
}

/// The failure envelope, plus the transport status for the caller to put on
/// the status line. The status is not part of the wire body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiErrorResponse {
    success: bool,
    pub error: ErrorDetail,
    #[serde(skip)]
    pub status: u16,
}

impl ApiErrorResponse {
    /// Always `false`.
    pub fn success(&self) -> bool {
        self.success
    }
}

/// The success envelope. Extra top-level fields may ride alongside `data`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiSuccessResponse<T> {
    success: bool,
    pub data: T,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl<T> ApiSuccessResponse<T> {
    /// Always `true`.
    pub fn success(&self) -> bool {
        self.success
    }

    /// Attach an additional top-level field alongside `data`.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Builds the failure envelope for `code`, resolving the message (custom
/// override or catalog default), retryable verdict, and transport status.
pub fn create_error_response(code: ErrorCode, custom_message: Option<&str>) -> ApiErrorResponse {
    let message = custom_message
        .map(str::to_owned)
        .unwrap_or_else(|| code.message().to_owned());
    ApiErrorResponse {
        success: false,
        error: ErrorDetail {
            code,
            message,
            retryable: code.is_retryable(),
        },
        status: code.status(),
    }
}

/// Wraps `data` in the success envelope.
pub fn create_success_response<T: Serialize>(data: T) -> ApiSuccessResponse<T> {
    ApiSuccessResponse {
        success: true,
        data,
        extra: serde_json::Map::new(),
    }
}

/// An incoming envelope as received on the calling side, before validation.
///
/// The `error` field accepts both the current object shape and the legacy
/// bare-string shape.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEnvelope {
    pub success: bool,
    #[serde(default)]
    pub error: Option<RawErrorField>,
}

/// The two historical encodings of the `error` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawErrorField {
    Structured {
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        retryable: Option<bool>,
    },
    Legacy(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{AiCode, QuizCode};
    use serde_json::json;

    #[test]
    fn error_envelope_is_bit_exact() {
        let resp = create_error_response(ErrorCode::Ai(AiCode::KeyInvalid), None);
        assert_eq!(resp.status, 500);
        let wire = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            wire,
            json!({
                "success": false,
                "error": {
                    "code": "FL-AI-002",
                    "message": "The AI service is not configured correctly. Please contact support.",
                    "retryable": false,
                }
            })
        );
    }

    #[test]
    fn custom_message_overrides_the_catalog() {
        let resp = create_error_response(
            ErrorCode::Quiz(QuizCode::Expired),
            Some("The quiz closed at midnight."),
        );
        assert_eq!(resp.error.message, "The quiz closed at midnight.");
        assert_eq!(resp.error.code, ErrorCode::Quiz(QuizCode::Expired));
    }

    #[test]
    fn success_envelope_discriminant_and_extra_fields() {
        let resp = create_success_response(json!({"id": 7}))
            .with_extra("warnings", json!([]))
            .with_extra("page", json!(2));
        assert!(resp.success());
        let wire = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            wire,
            json!({
                "success": true,
                "data": {"id": 7},
                "warnings": [],
                "page": 2,
            })
        );
    }

    #[test]
    fn envelope_discriminants_never_flip() {
        for code in ErrorCode::all() {
            assert!(!create_error_response(*code, None).success());
        }
        assert!(create_success_response(json!(null)).success());
    }

    #[test]
    fn raw_envelope_accepts_both_error_shapes() {
        let new: RawEnvelope = serde_json::from_value(json!({
            "success": false,
            "error": {"code": "FL-DB-001", "message": "This item already exists.", "retryable": false}
        }))
        .unwrap();
        assert!(matches!(new.error, Some(RawErrorField::Structured { .. })));

        let legacy: RawEnvelope =
            serde_json::from_value(json!({"success": false, "error": "Something broke"})).unwrap();
        assert!(matches!(legacy.error, Some(RawErrorField::Legacy(_))));
    }
}
