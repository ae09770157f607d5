//! Source mappers: one per upstream error shape.
//!
//! Each mapper translates a raw, source-specific error object into a
//! [`MappedError`] by walking an **ordered** list of `(predicate, code)`
//! rules, first match wins, falling through to its category's `Unknown` code.
//! The ordering is load-bearing: structured signals (driver codes, HTTP
//! statuses, `error.type` discriminators) are checked before substring rules
//! over lower-cased message text, because substrings legitimately collide.
//! Keeping the rules as data makes the order visible and testable instead of
//! buried in control flow.
//!
//! Mappers never fail: unrecognized input degrades to the category unknown so
//! callers always obtain a displayable result.

mod ai_service;
mod auth;
mod database;
mod storage;
mod validation;

pub use ai_service::{map_ai_error, RawAiError};
pub use auth::{map_auth_error, RawAuthError};
pub use database::{map_database_error, RawDbError};
pub use storage::{map_storage_error, RawStorageError};
pub use validation::{
    first_issue, malformed_body, map_validation_issue, map_validation_issues, RawValidationIssue,
};

use serde::Serialize;
use serde_json::Value;

use crate::codes::ErrorCode;

/// The canonical, fully-resolved description of a failure.
///
/// Built once by a mapper (or the client normalizer) and never mutated:
/// the same value may feed the response path and the logging path
/// concurrently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappedError {
    pub code: ErrorCode,
    pub message: String,
    pub retryable: bool,
}

impl MappedError {
    /// Resolves `code` to its catalog message and retryable verdict.
    pub fn of(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.message().to_owned(),
            retryable: code.is_retryable(),
        }
    }

    /// Replaces the catalog message. The replacement must itself be safe to
    /// display; mappers only use this for messages they construct.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl From<ErrorCode> for MappedError {
    fn from(code: ErrorCode) -> Self {
        Self::of(code)
    }
}

/// One ordered mapping rule: when `matches` holds, the raw error is `code`.
pub(crate) struct MappingRule<T: ?Sized> {
    pub matches: fn(&T) -> bool,
    pub code: ErrorCode,
}

/// Walks `rules` top to bottom; the first match wins.
pub(crate) fn try_first_match<T: ?Sized>(rules: &[MappingRule<T>], raw: &T) -> Option<ErrorCode> {
    rules
        .iter()
        .find(|rule| (rule.matches)(raw))
        .map(|rule| rule.code)
}

/// [`try_first_match`] with the category fallback applied.
pub(crate) fn first_match<T: ?Sized>(
    rules: &[MappingRule<T>],
    raw: &T,
    fallback: ErrorCode,
) -> ErrorCode {
    try_first_match(rules, raw).unwrap_or(fallback)
}

/// Maps an error whose origin is not statically known.
///
/// Shape heuristics pick the mapper: an object carrying an HTTP status field
/// is storage-shaped; a 5-character alphanumeric `code` is database-shaped;
/// anything else is treated as an auth-shaped message string.
pub fn map_unknown_source(raw: &Value) -> MappedError {
    if let Some(obj) = raw.as_object() {
        let has_status = obj
            .get("status")
            .or_else(|| obj.get("statusCode"))
            .is_some_and(Value::is_u64);
        if has_status {
            return map_storage_error(&RawStorageError::from_value(raw));
        }

        let db_shaped = obj
            .get("code")
            .and_then(Value::as_str)
            .is_some_and(|code| code.len() == 5 && code.chars().all(|c| c.is_ascii_alphanumeric()));
        if db_shaped {
            return map_database_error(&RawDbError::from_value(raw));
        }
    }

    let message = match raw {
        Value::String(s) => s.as_str(),
        _ => raw
            .as_object()
            .and_then(|obj| obj.get("message"))
            .and_then(Value::as_str)
            .unwrap_or_default(),
    };
    map_auth_error(&RawAuthError::from_message(message))
}
