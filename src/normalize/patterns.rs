//! Runtime failure-text pattern rules.
//!
//! The same ordered first-match-wins shape as the source mappers, tuned for
//! client-environment wording: browser network stacks, runtime engines, and
//! storage APIs all phrase failures differently across vendors. Rules match
//! lower-cased text.
//!
//! Vendor DNS messages are the reason this table exists at all: "A server
//! with the specified hostname could not be found" contains "not found" and
//! would pass the user-friendly allowlist verbatim if these rules did not run
//! first.

use crate::codes::{ClientCode, ErrorCode, NetCode};
use crate::mappers::{try_first_match, MappingRule};

fn offline(msg: &str) -> bool {
    msg.contains("offline") || msg.contains("internet_disconnected")
}

fn unreachable(msg: &str) -> bool {
    msg.contains("failed to fetch")
        || msg.contains("networkerror")
        || msg.contains("network request failed")
        || msg.contains("network connection was lost")
        || msg.contains("could not connect")
        || msg.contains("connection refused")
        || msg.contains("econnrefused")
        || msg.contains("econnreset")
        || msg.contains("hostname")
        || msg.contains("err_name_not_resolved")
        || msg.contains("dns")
}

fn timed_out(msg: &str) -> bool {
    // User-initiated aborts and genuine timeouts share one code for now.
    msg.contains("timed out")
        || msg.contains("timeout")
        || msg.contains("aborted")
        || msg.contains("abort")
        || msg.contains("cancelled")
        || msg.contains("canceled")
}

fn cross_origin(msg: &str) -> bool {
    msg.contains("cors") || msg.contains("cross-origin")
}

fn secure_connection(msg: &str) -> bool {
    msg.contains("ssl") || msg.contains("certificate") || msg.contains("secure connection")
}

fn script_load(msg: &str) -> bool {
    msg.contains("loading chunk") || msg.contains("chunkloaderror") || msg.contains("loading css chunk")
}

fn bad_response(msg: &str) -> bool {
    msg.contains("unexpected token")
        || msg.contains("unexpected end of json")
        || msg.contains("invalid json")
        || msg.contains("json.parse")
}

fn storage_quota(msg: &str) -> bool {
    msg.contains("quotaexceeded") || (msg.contains("quota") && msg.contains("exceeded"))
}

fn engine_internal(msg: &str) -> bool {
    msg.contains("internal error")
        || msg.contains("out of memory")
        || msg.contains("maximum call stack")
}

fn null_access(msg: &str) -> bool {
    msg.contains("cannot read propert")
        || msg.contains("undefined is not")
        || msg.contains("null is not an object")
        || msg.contains("is not a function")
}

// Network wording first (it is the most vendor-divergent), then engine and
// storage wording. "aborted"/"cancelled" sit in the timeout rule by design;
// see the module docs on the merged code.
const RULES: &[MappingRule<str>] = &[
    MappingRule { matches: offline, code: ErrorCode::Net(NetCode::Offline) },
    MappingRule { matches: unreachable, code: ErrorCode::Net(NetCode::Unreachable) },
    MappingRule { matches: timed_out, code: ErrorCode::Net(NetCode::Timeout) },
    MappingRule { matches: cross_origin, code: ErrorCode::Net(NetCode::Blocked) },
    MappingRule { matches: secure_connection, code: ErrorCode::Net(NetCode::SecureConnectionFailed) },
    MappingRule { matches: script_load, code: ErrorCode::Client(ClientCode::ScriptLoadFailed) },
    MappingRule { matches: bad_response, code: ErrorCode::Net(NetCode::BadResponse) },
    MappingRule { matches: storage_quota, code: ErrorCode::Client(ClientCode::StorageQuota) },
    MappingRule { matches: engine_internal, code: ErrorCode::Client(ClientCode::RuntimeError) },
    MappingRule { matches: null_access, code: ErrorCode::Client(ClientCode::NullAccess) },
];

/// Classifies runtime failure text, or `None` when no rule matches.
pub fn map_runtime_message(message: &str) -> Option<ErrorCode> {
    let lower = message.to_lowercase();
    try_first_match(RULES, lower.as_str())
}

/// Phrases that mark a string as already written for end users.
const FRIENDLY_PHRASES: &[&str] = &[
    "please",
    "try again",
    "not found",
    "unauthorized",
    "permission",
    "invalid",
    "required",
    "expired",
];

/// Whether `message` already reads as a user-facing sentence.
///
/// Only consulted *after* [`map_runtime_message`] declines; see the module
/// docs for why that order is mandatory.
pub fn looks_user_friendly(message: &str) -> bool {
    let lower = message.to_lowercase();
    FRIENDLY_PHRASES.iter().any(|phrase| lower.contains(phrase))
}
