//! Generative-AI provider error mapping.
//!
//! Precedence is strict and tested: the provider's `error.type` discriminator
//! outranks the HTTP status, and the status outranks message text. A 429
//! whose message mentions overload is still rate-limited.

use serde::Deserialize;
use serde_json::Value;

use super::{first_match, MappedError, MappingRule};
use crate::codes::{AiCode, ErrorCode};

/// A raw AI-provider error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAiError {
    #[serde(default)]
    pub status: Option<u16>,
    /// The provider's `error.type` discriminator, when present.
    #[serde(default, rename = "type")]
    pub error_type: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl RawAiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            error_type: None,
            message: message.into(),
        }
    }

    pub fn with_type(mut self, error_type: impl Into<String>) -> Self {
        self.error_type = Some(error_type.into());
        self
    }

    /// Parses the provider's wire shape, accepting both a flat error object
    /// and the nested `{"type": "error", "error": {...}}` form.
    pub fn from_value(raw: &Value) -> Self {
        let inner = raw.get("error").filter(|v| v.is_object()).unwrap_or(raw);
        let mut parsed: RawAiError = serde_json::from_value(inner.clone()).unwrap_or_default();
        if parsed.status.is_none() {
            parsed.status = raw.get("status").and_then(Value::as_u64).map(|s| s as u16);
        }
        parsed
    }

    fn type_str(&self) -> &str {
        self.error_type.as_deref().unwrap_or_default()
    }

    fn message_lower(&self) -> String {
        self.message.to_lowercase()
    }
}

fn type_invalid_request(raw: &RawAiError) -> bool {
    raw.type_str() == "invalid_request_error"
}

fn type_authentication(raw: &RawAiError) -> bool {
    raw.type_str() == "authentication_error"
}

fn type_permission(raw: &RawAiError) -> bool {
    raw.type_str() == "permission_error"
}

fn type_rate_limit(raw: &RawAiError) -> bool {
    raw.type_str() == "rate_limit_error"
}

fn type_api_error(raw: &RawAiError) -> bool {
    raw.type_str() == "api_error"
}

fn type_overloaded(raw: &RawAiError) -> bool {
    raw.type_str() == "overloaded_error"
}

fn type_timeout(raw: &RawAiError) -> bool {
    raw.type_str() == "timeout_error"
}

fn status_bad_request(raw: &RawAiError) -> bool {
    raw.status == Some(400)
}

fn status_unauthorized(raw: &RawAiError) -> bool {
    raw.status == Some(401)
}

fn status_forbidden(raw: &RawAiError) -> bool {
    raw.status == Some(403)
}

fn status_too_large(raw: &RawAiError) -> bool {
    raw.status == Some(413)
}

fn status_rate_limited(raw: &RawAiError) -> bool {
    raw.status == Some(429)
}

fn status_server_error(raw: &RawAiError) -> bool {
    matches!(raw.status, Some(500) | Some(502) | Some(503))
}

fn status_gateway_timeout(raw: &RawAiError) -> bool {
    raw.status == Some(504)
}

fn status_overloaded(raw: &RawAiError) -> bool {
    // 529: the provider's non-standard overload status.
    raw.status == Some(529)
}

fn message_overloaded(raw: &RawAiError) -> bool {
    raw.message_lower().contains("overloaded")
}

fn message_rate_limit(raw: &RawAiError) -> bool {
    raw.message_lower().contains("rate limit")
}

fn message_timeout(raw: &RawAiError) -> bool {
    let msg = raw.message_lower();
    msg.contains("timed out") || msg.contains("timeout")
}

fn message_context_length(raw: &RawAiError) -> bool {
    let msg = raw.message_lower();
    msg.contains("context length") || msg.contains("maximum context") || msg.contains("too long")
}

fn message_content_filter(raw: &RawAiError) -> bool {
    let msg = raw.message_lower();
    msg.contains("content filter") || msg.contains("safety") || msg.contains("harmful")
}

fn message_api_key(raw: &RawAiError) -> bool {
    let msg = raw.message_lower();
    msg.contains("api key") || msg.contains("x-api-key")
}

const RULES: &[MappingRule<RawAiError>] = &[
    // error.type discriminator, ahead of everything else
    MappingRule { matches: type_invalid_request, code: ErrorCode::Ai(AiCode::InvalidFormat) },
    MappingRule { matches: type_authentication, code: ErrorCode::Ai(AiCode::KeyInvalid) },
    MappingRule { matches: type_permission, code: ErrorCode::Ai(AiCode::ContentFiltered) },
    MappingRule { matches: type_rate_limit, code: ErrorCode::Ai(AiCode::RateLimited) },
    MappingRule { matches: type_overloaded, code: ErrorCode::Ai(AiCode::Overloaded) },
    MappingRule { matches: type_timeout, code: ErrorCode::Ai(AiCode::Timeout) },
    MappingRule { matches: type_api_error, code: ErrorCode::Ai(AiCode::Unavailable) },
    // HTTP status, ahead of message text
    MappingRule { matches: status_bad_request, code: ErrorCode::Ai(AiCode::InvalidFormat) },
    MappingRule { matches: status_unauthorized, code: ErrorCode::Ai(AiCode::KeyInvalid) },
    MappingRule { matches: status_forbidden, code: ErrorCode::Ai(AiCode::ContentFiltered) },
    MappingRule { matches: status_too_large, code: ErrorCode::Ai(AiCode::ContextTooLong) },
    MappingRule { matches: status_rate_limited, code: ErrorCode::Ai(AiCode::RateLimited) },
    MappingRule { matches: status_server_error, code: ErrorCode::Ai(AiCode::Unavailable) },
    MappingRule { matches: status_gateway_timeout, code: ErrorCode::Ai(AiCode::Timeout) },
    MappingRule { matches: status_overloaded, code: ErrorCode::Ai(AiCode::Overloaded) },
    // message text, last
    MappingRule { matches: message_overloaded, code: ErrorCode::Ai(AiCode::Overloaded) },
    MappingRule { matches: message_rate_limit, code: ErrorCode::Ai(AiCode::RateLimited) },
    MappingRule { matches: message_timeout, code: ErrorCode::Ai(AiCode::Timeout) },
    MappingRule { matches: message_context_length, code: ErrorCode::Ai(AiCode::ContextTooLong) },
    MappingRule { matches: message_content_filter, code: ErrorCode::Ai(AiCode::ContentFiltered) },
    MappingRule { matches: message_api_key, code: ErrorCode::Ai(AiCode::KeyInvalid) },
];

/// Maps a raw AI-provider error to its canonical description.
pub fn map_ai_error(raw: &RawAiError) -> MappedError {
    let code = first_match(RULES, raw, ErrorCode::Ai(AiCode::Unknown));
    if code == ErrorCode::Ai(AiCode::Unknown) {
        tracing::debug!(status = raw.status, "unclassified AI-service error");
    }
    MappedError::of(code)
}
