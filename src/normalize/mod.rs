//! Client-side error normalization.
//!
//! Turns whatever the calling side received — a structured API envelope, a
//! runtime error object, a plain string — into a canonical [`MappedError`],
//! and from there into display text. Precedence:
//!
//! 1. a structured envelope is parsed directly, no heuristics;
//! 2. a runtime error object's message goes through the ordered pattern
//!    rules in [`patterns`];
//! 3. a plain string goes through the pattern rules **first** and the
//!    already-user-friendly allowlist second — never the other way around,
//!    or vendor network wording leaks to users verbatim;
//! 4. anything else becomes the fallback.

pub mod patterns;

pub use patterns::{looks_user_friendly, map_runtime_message};

use serde_json::Value;

use crate::codes::{ClientCode, ErrorCode};
use crate::envelope::{RawEnvelope, RawErrorField};
use crate::mappers::MappedError;

/// Options for [`display_error`].
#[derive(Debug, Clone, Default)]
pub struct DisplayOptions {
    /// Append the canonical code to the message, e.g. `"... (FL-NET-001)"`.
    pub show_code: bool,
    /// Replaces the generic unknown message when nothing classified.
    pub fallback: Option<String>,
}

fn unknown_client_error() -> MappedError {
    MappedError::of(ErrorCode::Client(ClientCode::Unknown))
}

/// Parses a structured API envelope into a [`MappedError`].
///
/// Returns `None` when `value` is not an error envelope at all (no `success`
/// discriminant, or a success envelope). Both the current object shape and
/// the legacy bare-string shape parse; an unregistered code falls back to
/// the client unknown while keeping the server-supplied message, which is
/// catalog text by construction.
pub fn parse_api_error(value: &Value) -> Option<MappedError> {
    if !value
        .as_object()
        .is_some_and(|obj| obj.get("success").is_some_and(Value::is_boolean))
    {
        return None;
    }
    let envelope: RawEnvelope = serde_json::from_value(value.clone()).ok()?;
    if envelope.success {
        return None;
    }

    let mapped = match envelope.error {
        Some(RawErrorField::Structured {
            code,
            message,
            retryable,
        }) => {
            let parsed = code.as_deref().and_then(ErrorCode::parse);
            match parsed {
                Some(code) => MappedError {
                    code,
                    message: message.unwrap_or_else(|| code.message().to_owned()),
                    retryable: retryable.unwrap_or_else(|| code.is_retryable()),
                },
                None => {
                    let fallback = unknown_client_error();
                    match message {
                        Some(message) => fallback.with_message(message),
                        None => fallback,
                    }
                }
            }
        }
        Some(RawErrorField::Legacy(message)) => unknown_client_error().with_message(message),
        None => unknown_client_error(),
    };
    Some(mapped)
}

fn normalize_message(message: &str, fallback: impl FnOnce() -> MappedError) -> MappedError {
    // Pattern rules first. The friendly allowlist only sees text the rules
    // declined, so "...could not be found" DNS wording cannot slip through.
    if let Some(code) = map_runtime_message(message) {
        return MappedError::of(code);
    }
    if looks_user_friendly(message) {
        return unknown_client_error().with_message(message);
    }
    fallback()
}

/// Normalizes any received value into a canonical [`MappedError`].
///
/// Never fails; unrecognizable input degrades to the client unknown code.
pub fn normalize_failure(value: &Value) -> MappedError {
    if let Some(mapped) = parse_api_error(value) {
        return mapped;
    }

    // A runtime error object: `{message, name?, stack?}` without the
    // envelope discriminant.
    if let Some(message) = value
        .as_object()
        .and_then(|obj| obj.get("message"))
        .and_then(Value::as_str)
    {
        return normalize_message(message, unknown_client_error);
    }

    if let Some(message) = value.as_str() {
        return normalize_message(message, unknown_client_error);
    }

    unknown_client_error()
}

/// Resolves the display string for any received value.
pub fn display_error(value: &Value, options: &DisplayOptions) -> String {
    let mapped = normalize_failure(value);
    let generic_unknown = mapped.code == ErrorCode::Client(ClientCode::Unknown)
        && mapped.message == ClientCode::Unknown.message();
    let message = match (&options.fallback, generic_unknown) {
        (Some(fallback), true) => fallback.clone(),
        _ => mapped.message,
    };
    if options.show_code {
        format!("{message} ({})", mapped.code)
    } else {
        message
    }
}

/// Just the canonical code for any received value.
pub fn error_code_of(value: &Value) -> ErrorCode {
    normalize_failure(value).code
}

/// Just the retry verdict for any received value; the UI uses this to decide
/// whether a "try again" action is worth offering.
pub fn is_retryable_failure(value: &Value) -> bool {
    normalize_failure(value).retryable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{AiCode, NetCode};
    use serde_json::json;

    #[test]
    fn structured_envelopes_parse_without_heuristics() {
        let value = json!({
            "success": false,
            "error": {"code": "FL-AI-004", "message": "busy", "retryable": true}
        });
        let mapped = parse_api_error(&value).unwrap();
        assert_eq!(mapped.code, ErrorCode::Ai(AiCode::RateLimited));
        assert_eq!(mapped.message, "busy");
        assert!(mapped.retryable);
    }

    #[test]
    fn legacy_envelopes_map_to_client_unknown() {
        let value = json!({"success": false, "error": "Something broke"});
        let mapped = parse_api_error(&value).unwrap();
        assert_eq!(mapped.code, ErrorCode::Client(ClientCode::Unknown));
        assert_eq!(mapped.message, "Something broke");
        assert!(!mapped.retryable);
    }

    #[test]
    fn success_envelopes_are_not_errors() {
        assert!(parse_api_error(&json!({"success": true, "data": 1})).is_none());
        assert!(parse_api_error(&json!({"message": "no discriminant"})).is_none());
    }

    #[test]
    fn unregistered_codes_keep_the_safe_message() {
        let value = json!({
            "success": false,
            "error": {"code": "FL-ZZZ-999", "message": "A known-safe sentence.", "retryable": true}
        });
        let mapped = parse_api_error(&value).unwrap();
        assert_eq!(mapped.code, ErrorCode::Client(ClientCode::Unknown));
        assert_eq!(mapped.message, "A known-safe sentence.");
    }

    #[test]
    fn dns_wording_never_reaches_users_verbatim() {
        // The documented precedence guard: this string contains "not found"
        // and would pass the friendly allowlist if checked first.
        let value = json!("A server with the specified hostname could not be found");
        let mapped = normalize_failure(&value);
        assert_eq!(mapped.code, ErrorCode::Net(NetCode::Unreachable));
        assert_eq!(mapped.message, NetCode::Unreachable.message());
        assert!(mapped.retryable);
    }

    #[test]
    fn friendly_strings_pass_through_verbatim() {
        let value = json!("Your quiz was not found. Please refresh the list.");
        let mapped = normalize_failure(&value);
        assert_eq!(mapped.message, "Your quiz was not found. Please refresh the list.");
        assert_eq!(mapped.code, ErrorCode::Client(ClientCode::Unknown));
    }

    #[test]
    fn runtime_error_objects_use_pattern_rules() {
        let value = json!({"name": "TypeError", "message": "Failed to fetch"});
        assert_eq!(error_code_of(&value), ErrorCode::Net(NetCode::Unreachable));
        assert!(is_retryable_failure(&value));
    }

    #[test]
    fn unsafe_internal_text_is_replaced() {
        let value = json!({"name": "Error", "message": "ECONNREFUSED db.internal:5432"});
        let mapped = normalize_failure(&value);
        // "connection refused" wording is network-unreachable; the raw host
        // detail is gone either way.
        assert!(!mapped.message.contains("db.internal"));
    }

    #[test]
    fn display_error_appends_the_code_on_request() {
        let shown = display_error(
            &json!("Request timed out"),
            &DisplayOptions {
                show_code: true,
                fallback: None,
            },
        );
        assert_eq!(shown, format!("{} (FL-NET-002)", NetCode::Timeout.message()));
    }

    #[test]
    fn display_error_uses_the_caller_fallback_for_noise() {
        let shown = display_error(
            &json!(42),
            &DisplayOptions {
                show_code: false,
                fallback: Some("Could not save your changes.".into()),
            },
        );
        assert_eq!(shown, "Could not save your changes.");
    }
}
