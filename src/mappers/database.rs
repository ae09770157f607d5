//! Database driver error mapping.
//!
//! Raw driver errors carry a 5-character SQLSTATE (or a PostgREST `PGRSTnnn`
//! code) and a message. SQLSTATE families are checked before any message
//! text: the `23` family is a constraint violation, the `08` family a
//! connection failure, `40P01`/`40001` concurrency victims. Text rules run
//! last because words like "timeout" and "connection" appear together in
//! real driver messages.

use serde::Deserialize;
use serde_json::Value;

use super::{first_match, MappedError, MappingRule};
use crate::codes::{DbCode, ErrorCode};

/// A raw database error as produced by the driver layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDbError {
    /// SQLSTATE or PostgREST code, when the driver supplied one.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Driver-specific detail line; never shown to users.
    #[serde(default)]
    pub detail: Option<String>,
}

impl RawDbError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: Some(message.into()),
            detail: None,
        }
    }

    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: Some(message.into()),
            detail: None,
        }
    }

    pub(crate) fn from_value(raw: &Value) -> Self {
        serde_json::from_value(raw.clone()).unwrap_or_default()
    }

    fn code_str(&self) -> &str {
        self.code.as_deref().unwrap_or_default()
    }

    fn message_lower(&self) -> String {
        self.message.as_deref().unwrap_or_default().to_lowercase()
    }
}

fn no_rows(raw: &RawDbError) -> bool {
    // PostgREST: a single-row request matched zero rows. Not alarming.
    raw.code_str() == "PGRST116"
}

fn unique_violation(raw: &RawDbError) -> bool {
    raw.code_str() == "23505"
}

fn foreign_key_violation(raw: &RawDbError) -> bool {
    raw.code_str() == "23503"
}

fn not_null_violation(raw: &RawDbError) -> bool {
    raw.code_str() == "23502"
}

fn check_violation(raw: &RawDbError) -> bool {
    raw.code_str() == "23514"
}

fn deadlock_detected(raw: &RawDbError) -> bool {
    raw.code_str() == "40P01"
}

fn serialization_failure(raw: &RawDbError) -> bool {
    raw.code_str() == "40001"
}

fn connection_family(raw: &RawDbError) -> bool {
    raw.code_str().len() == 5 && raw.code_str().starts_with("08")
}

fn statement_timeout(raw: &RawDbError) -> bool {
    // 57014: query_canceled, raised by statement_timeout.
    raw.code_str() == "57014"
}

fn connection_limit(raw: &RawDbError) -> bool {
    raw.code_str() == "53300"
}

fn message_deadlock(raw: &RawDbError) -> bool {
    raw.message_lower().contains("deadlock")
}

fn message_duplicate(raw: &RawDbError) -> bool {
    raw.message_lower().contains("duplicate key")
}

fn message_connection(raw: &RawDbError) -> bool {
    raw.message_lower().contains("connection")
}

fn message_timeout(raw: &RawDbError) -> bool {
    let msg = raw.message_lower();
    msg.contains("timeout") || msg.contains("timed out")
}

fn message_no_rows(raw: &RawDbError) -> bool {
    let msg = raw.message_lower();
    msg.contains("no rows") || msg.contains("0 rows")
}

// Structured SQLSTATE rules first; message text only as a last resort.
// "deadlock" outranks "connection" outranks "timeout" among the text rules,
// so a message mentioning several resolves the same way every time.
const RULES: &[MappingRule<RawDbError>] = &[
    MappingRule { matches: no_rows, code: ErrorCode::Db(DbCode::NotFound) },
    MappingRule { matches: unique_violation, code: ErrorCode::Db(DbCode::UniqueViolation) },
    MappingRule { matches: foreign_key_violation, code: ErrorCode::Db(DbCode::ForeignKeyViolation) },
    MappingRule { matches: not_null_violation, code: ErrorCode::Db(DbCode::NotNullViolation) },
    MappingRule { matches: check_violation, code: ErrorCode::Db(DbCode::CheckViolation) },
    MappingRule { matches: deadlock_detected, code: ErrorCode::Db(DbCode::Deadlock) },
    MappingRule { matches: serialization_failure, code: ErrorCode::Db(DbCode::SerializationFailure) },
    MappingRule { matches: connection_family, code: ErrorCode::Db(DbCode::ConnectionFailed) },
    MappingRule { matches: statement_timeout, code: ErrorCode::Db(DbCode::Timeout) },
    MappingRule { matches: connection_limit, code: ErrorCode::Db(DbCode::ConnectionLimit) },
    MappingRule { matches: message_deadlock, code: ErrorCode::Db(DbCode::Deadlock) },
    MappingRule { matches: message_duplicate, code: ErrorCode::Db(DbCode::UniqueViolation) },
    MappingRule { matches: message_connection, code: ErrorCode::Db(DbCode::ConnectionFailed) },
    MappingRule { matches: message_timeout, code: ErrorCode::Db(DbCode::Timeout) },
    MappingRule { matches: message_no_rows, code: ErrorCode::Db(DbCode::NotFound) },
];

/// Maps a raw database error to its canonical description.
pub fn map_database_error(raw: &RawDbError) -> MappedError {
    let code = first_match(RULES, raw, ErrorCode::Db(DbCode::Unknown));
    if code == ErrorCode::Db(DbCode::Unknown) {
        tracing::debug!(code = raw.code_str(), "unclassified database error");
    }
    MappedError::of(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlstate_families_map_to_constraint_codes() {
        let cases = [
            ("23505", DbCode::UniqueViolation),
            ("23503", DbCode::ForeignKeyViolation),
            ("23502", DbCode::NotNullViolation),
            ("23514", DbCode::CheckViolation),
            ("40P01", DbCode::Deadlock),
            ("40001", DbCode::SerializationFailure),
            ("08006", DbCode::ConnectionFailed),
            ("08001", DbCode::ConnectionFailed),
            ("57014", DbCode::Timeout),
            ("53300", DbCode::ConnectionLimit),
        ];
        for (sqlstate, expected) in cases {
            let mapped = map_database_error(&RawDbError::new(sqlstate, "irrelevant"));
            assert_eq!(mapped.code, ErrorCode::Db(expected), "SQLSTATE {sqlstate}");
        }
    }

    #[test]
    fn zero_rows_is_not_found_not_an_alarm() {
        let mapped = map_database_error(&RawDbError::new(
            "PGRST116",
            "JSON object requested, multiple (or no) rows returned",
        ));
        assert_eq!(mapped.code, ErrorCode::Db(DbCode::NotFound));
        assert!(!mapped.retryable);
    }

    #[test]
    fn structured_code_outranks_message_text() {
        // The message says "connection", but the SQLSTATE says deadlock.
        let mapped = map_database_error(&RawDbError::new(
            "40P01",
            "deadlock detected while waiting for connection slot",
        ));
        assert_eq!(mapped.code, ErrorCode::Db(DbCode::Deadlock));
    }

    #[test]
    fn colliding_substrings_resolve_by_rule_order() {
        // Both "connection" and "timeout" appear; the connection rule is
        // declared first and must win deterministically.
        let mapped = map_database_error(&RawDbError::from_message(
            "connection to server timed out",
        ));
        assert_eq!(mapped.code, ErrorCode::Db(DbCode::ConnectionFailed));
    }

    #[test]
    fn unrecognized_input_degrades_to_db_unknown() {
        let mapped = map_database_error(&RawDbError::new("XX000", "internal_error"));
        assert_eq!(mapped.code, ErrorCode::Db(DbCode::Unknown));
    }

    #[test]
    fn mapping_is_deterministic() {
        let raw = RawDbError::new("23505", "duplicate key value violates unique constraint");
        assert_eq!(map_database_error(&raw), map_database_error(&raw));
    }

    #[test]
    fn raw_message_never_leaks_into_the_mapped_error() {
        let raw = RawDbError::new("23505", "duplicate key value violates \"users_email_key\"");
        let mapped = map_database_error(&raw);
        assert!(!mapped.message.contains("users_email_key"));
    }
}
