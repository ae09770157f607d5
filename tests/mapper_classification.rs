//! Cross-mapper classification properties: rule ordering, dispatch
//! heuristics, and determinism.

use faultline::codes::{AiCode, AuthCode, DbCode, ErrorCode, StorageCode, ValCode};
use faultline::mappers::{
    first_issue, map_ai_error, map_auth_error, map_database_error, map_storage_error,
    map_unknown_source, map_validation_issues, RawAiError, RawAuthError, RawDbError,
    RawStorageError, RawValidationIssue,
};
use serde_json::json;

#[test]
fn ai_status_is_checked_before_message_text() {
    // The documented precedence guard: 429 plus "overloaded" wording is
    // rate-limited, because the status rule fires first.
    let raw = RawAiError::new(429, "the upstream model is overloaded");
    let mapped = map_ai_error(&raw);
    assert_eq!(mapped.code, ErrorCode::Ai(AiCode::RateLimited));
    assert!(mapped.retryable);
}

#[test]
fn ai_error_type_discriminator_outranks_status() {
    let raw = RawAiError::new(500, "").with_type("rate_limit_error");
    assert_eq!(map_ai_error(&raw).code, ErrorCode::Ai(AiCode::RateLimited));
}

#[test]
fn database_constraint_family_resolves_before_text() {
    let raw = RawDbError::new("23503", "update on table \"lessons\" violates foreign key");
    assert_eq!(
        map_database_error(&raw).code,
        ErrorCode::Db(DbCode::ForeignKeyViolation)
    );
}

#[test]
fn database_connection_family_is_prefix_matched() {
    for sqlstate in ["08000", "08003", "08006", "08P01"] {
        let raw = RawDbError::new(sqlstate, "");
        assert_eq!(
            map_database_error(&raw).code,
            ErrorCode::Db(DbCode::ConnectionFailed),
            "SQLSTATE {sqlstate}"
        );
    }
}

#[test]
fn dispatcher_picks_mappers_by_shape() {
    // HTTP status field: storage-shaped.
    let storage = map_unknown_source(&json!({"statusCode": 413, "message": "too big"}));
    assert_eq!(
        storage.code,
        ErrorCode::Storage(StorageCode::PayloadTooLarge)
    );

    // 5-character alphanumeric code: database-shaped.
    let db = map_unknown_source(&json!({"code": "40P01", "message": ""}));
    assert_eq!(db.code, ErrorCode::Db(DbCode::Deadlock));

    // Anything else: an auth-shaped message string.
    let auth = map_unknown_source(&json!({"message": "JWT expired"}));
    assert_eq!(auth.code, ErrorCode::Auth(AuthCode::SessionExpired));
}

#[test]
fn mappers_are_idempotent_over_the_same_raw_error() {
    let db = RawDbError::new("23505", "duplicate key");
    assert_eq!(map_database_error(&db), map_database_error(&db));

    let ai = RawAiError::new(529, "Overloaded");
    assert_eq!(map_ai_error(&ai), map_ai_error(&ai));

    let storage = RawStorageError::new(404, "Object not found");
    assert_eq!(map_storage_error(&storage), map_storage_error(&storage));

    let auth = RawAuthError::from_message("Invalid login credentials");
    assert_eq!(map_auth_error(&auth), map_auth_error(&auth));
}

#[test]
fn mappers_never_fail_on_garbage() {
    let mapped = map_unknown_source(&json!({"wat": [1, 2, 3]}));
    assert_eq!(mapped.code, ErrorCode::Auth(AuthCode::Unknown));

    let mapped = map_unknown_source(&json!(null));
    assert_eq!(mapped.code, ErrorCode::Auth(AuthCode::Unknown));
}

#[test]
fn validation_issue_lists_map_per_field() {
    let issues = vec![
        RawValidationIssue {
            path: vec![json!("title")],
            field: None,
            code: Some("too_small".into()),
            message: Some("String must contain at least 1 character(s)".into()),
        },
        RawValidationIssue {
            path: vec![json!("questions"), json!(0), json!("kind")],
            field: None,
            code: Some("invalid_enum_value".into()),
            message: Some("Invalid enum value".into()),
        },
    ];
    let mapped = map_validation_issues(&issues);
    assert_eq!(mapped.len(), 2);
    assert_eq!(mapped[0].code, ErrorCode::Val(ValCode::TooShort));
    assert_eq!(mapped[1].code, ErrorCode::Val(ValCode::InvalidChoice));
    assert!(mapped[1].message.starts_with("questions.0.kind:"));

    let first = first_issue(&issues);
    assert_eq!(first.code, mapped[0].code);
}

#[test]
fn no_mapper_leaks_raw_upstream_text() {
    let leaky_inputs = [
        json!({"code": "23505", "message": "duplicate key value violates \"users_email_key\""}),
        json!({"status": 500, "message": "Postgres crashed at 10.0.0.4"}),
        json!({"message": "password hash mismatch for row 42"}),
    ];
    for input in &leaky_inputs {
        let mapped = map_unknown_source(input);
        assert!(!mapped.message.contains("users_email_key"));
        assert!(!mapped.message.contains("10.0.0.4"));
        assert!(!mapped.message.contains("row 42"));
    }
}
