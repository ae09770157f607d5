//! Object-storage provider error mapping.
//!
//! Storage errors carry an HTTP status; the status is the structured signal
//! and is checked before any message text.

use serde::Deserialize;
use serde_json::Value;

use super::{first_match, MappedError, MappingRule};
use crate::codes::{ErrorCode, StorageCode};

/// A raw storage-provider error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStorageError {
    #[serde(default, alias = "statusCode")]
    pub status: Option<u16>,
    /// Provider error name, e.g. `NoSuchKey`.
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl RawStorageError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            error: None,
            message: message.into(),
        }
    }

    pub(crate) fn from_value(raw: &Value) -> Self {
        serde_json::from_value(raw.clone()).unwrap_or_default()
    }

    fn message_lower(&self) -> String {
        self.message.to_lowercase()
    }
}

fn status_not_found(raw: &RawStorageError) -> bool {
    raw.status == Some(404)
}

fn status_denied(raw: &RawStorageError) -> bool {
    matches!(raw.status, Some(401) | Some(403))
}

fn status_too_large(raw: &RawStorageError) -> bool {
    raw.status == Some(413)
}

fn status_server(raw: &RawStorageError) -> bool {
    raw.status.is_some_and(|s| s >= 500)
}

fn message_bucket_missing(raw: &RawStorageError) -> bool {
    let msg = raw.message_lower();
    msg.contains("bucket") && (msg.contains("not found") || msg.contains("does not exist"))
}

fn message_not_found(raw: &RawStorageError) -> bool {
    let msg = raw.message_lower();
    msg.contains("not found") || msg.contains("no such key")
}

fn message_quota(raw: &RawStorageError) -> bool {
    let msg = raw.message_lower();
    msg.contains("quota") || msg.contains("storage full")
}

fn message_too_large(raw: &RawStorageError) -> bool {
    let msg = raw.message_lower();
    msg.contains("too large") || msg.contains("exceeds the maximum")
}

// Status rules first. Among the text rules the bucket check precedes the
// generic not-found check, since a missing bucket message also says
// "not found".
const RULES: &[MappingRule<RawStorageError>] = &[
    MappingRule { matches: status_not_found, code: ErrorCode::Storage(StorageCode::ObjectNotFound) },
    MappingRule { matches: status_denied, code: ErrorCode::Storage(StorageCode::AccessDenied) },
    MappingRule { matches: status_too_large, code: ErrorCode::Storage(StorageCode::PayloadTooLarge) },
    MappingRule { matches: status_server, code: ErrorCode::Storage(StorageCode::ServiceUnavailable) },
    MappingRule { matches: message_bucket_missing, code: ErrorCode::Storage(StorageCode::BucketNotFound) },
    MappingRule { matches: message_not_found, code: ErrorCode::Storage(StorageCode::ObjectNotFound) },
    MappingRule { matches: message_quota, code: ErrorCode::Storage(StorageCode::QuotaExceeded) },
    MappingRule { matches: message_too_large, code: ErrorCode::Storage(StorageCode::PayloadTooLarge) },
];

/// Maps a raw storage-provider error to its canonical description.
pub fn map_storage_error(raw: &RawStorageError) -> MappedError {
    let code = first_match(RULES, raw, ErrorCode::Storage(StorageCode::Unknown));
    if code == ErrorCode::Storage(StorageCode::Unknown) {
        tracing::debug!(status = raw.status, "unclassified storage error");
    }
    MappedError::of(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_rules_outrank_message_text() {
        // 404 with a message mentioning quota still means the object is gone.
        let mapped = map_storage_error(&RawStorageError::new(404, "quota check passed"));
        assert_eq!(mapped.code, ErrorCode::Storage(StorageCode::ObjectNotFound));
    }

    #[test]
    fn missing_bucket_beats_generic_not_found_text() {
        let raw = RawStorageError {
            status: None,
            error: None,
            message: "Bucket not found".into(),
        };
        assert_eq!(
            map_storage_error(&raw).code,
            ErrorCode::Storage(StorageCode::BucketNotFound)
        );
    }

    #[test]
    fn server_statuses_are_retryable_unavailability() {
        let mapped = map_storage_error(&RawStorageError::new(503, ""));
        assert_eq!(
            mapped.code,
            ErrorCode::Storage(StorageCode::ServiceUnavailable)
        );
        assert!(mapped.retryable);
    }

    #[test]
    fn quota_exhaustion_is_not_retryable() {
        let raw = RawStorageError {
            status: None,
            error: None,
            message: "storage quota exceeded".into(),
        };
        let mapped = map_storage_error(&raw);
        assert_eq!(mapped.code, ErrorCode::Storage(StorageCode::QuotaExceeded));
        assert!(!mapped.retryable);
    }

    #[test]
    fn unrecognized_input_degrades_to_storage_unknown() {
        let mapped = map_storage_error(&RawStorageError::default());
        assert_eq!(mapped.code, ErrorCode::Storage(StorageCode::Unknown));
    }
}
