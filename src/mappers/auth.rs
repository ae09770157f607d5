//! Auth provider error mapping.
//!
//! The auth provider reports failures as an optional machine code, an
//! optional HTTP status, and a message. Machine codes are checked first,
//! then message substrings over the lower-cased text.

use serde::Deserialize;

use super::{first_match, MappedError, MappingRule};
use crate::codes::{AuthCode, ErrorCode, UserCode};

/// A raw auth-provider error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAuthError {
    #[serde(default)]
    pub status: Option<u16>,
    /// Provider machine code, e.g. `invalid_credentials`.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl RawAuthError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: None,
            code: Some(code.into()),
            message: message.into(),
        }
    }

    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            status: None,
            code: None,
            message: message.into(),
        }
    }

    fn code_str(&self) -> &str {
        self.code.as_deref().unwrap_or_default()
    }

    fn message_lower(&self) -> String {
        self.message.to_lowercase()
    }
}

fn code_invalid_credentials(raw: &RawAuthError) -> bool {
    raw.code_str() == "invalid_credentials"
}

fn code_email_not_confirmed(raw: &RawAuthError) -> bool {
    raw.code_str() == "email_not_confirmed"
}

fn code_user_banned(raw: &RawAuthError) -> bool {
    raw.code_str() == "user_banned"
}

fn code_user_exists(raw: &RawAuthError) -> bool {
    raw.code_str() == "user_already_exists"
}

fn code_rate_limit(raw: &RawAuthError) -> bool {
    matches!(
        raw.code_str(),
        "over_request_rate_limit" | "over_email_send_rate_limit" | "over_sms_send_rate_limit"
    )
}

fn code_session_expired(raw: &RawAuthError) -> bool {
    matches!(raw.code_str(), "session_expired" | "refresh_token_not_found")
}

fn code_mfa(raw: &RawAuthError) -> bool {
    matches!(
        raw.code_str(),
        "mfa_challenge_expired" | "mfa_verification_failed"
    )
}

fn message_invalid_credentials(raw: &RawAuthError) -> bool {
    raw.message_lower().contains("invalid login credentials")
}

fn message_token_expired(raw: &RawAuthError) -> bool {
    let msg = raw.message_lower();
    msg.contains("jwt expired") || msg.contains("token is expired") || msg.contains("refresh token")
}

fn message_token_invalid(raw: &RawAuthError) -> bool {
    let msg = raw.message_lower();
    msg.contains("invalid jwt") || msg.contains("invalid token") || msg.contains("malformed jwt")
}

fn message_email_not_confirmed(raw: &RawAuthError) -> bool {
    raw.message_lower().contains("email not confirmed")
}

fn message_already_registered(raw: &RawAuthError) -> bool {
    raw.message_lower().contains("already registered")
}

fn message_banned(raw: &RawAuthError) -> bool {
    let msg = raw.message_lower();
    msg.contains("banned") || msg.contains("disabled")
}

fn message_rate_limit(raw: &RawAuthError) -> bool {
    let msg = raw.message_lower();
    msg.contains("rate limit") || msg.contains("too many requests")
}

fn message_reset_expired(raw: &RawAuthError) -> bool {
    let msg = raw.message_lower();
    msg.contains("reset") && msg.contains("expired")
}

fn message_oauth(raw: &RawAuthError) -> bool {
    let msg = raw.message_lower();
    msg.contains("oauth") || msg.contains("provider")
}

// A registration conflict is a user-record fact, not a credential problem, so
// it maps into the USER category.
const RULES: &[MappingRule<RawAuthError>] = &[
    MappingRule { matches: code_invalid_credentials, code: ErrorCode::Auth(AuthCode::InvalidCredentials) },
    MappingRule { matches: code_email_not_confirmed, code: ErrorCode::Auth(AuthCode::EmailNotVerified) },
    MappingRule { matches: code_user_banned, code: ErrorCode::Auth(AuthCode::AccountDisabled) },
    MappingRule { matches: code_user_exists, code: ErrorCode::User(UserCode::AlreadyExists) },
    MappingRule { matches: code_rate_limit, code: ErrorCode::Auth(AuthCode::TooManyAttempts) },
    MappingRule { matches: code_session_expired, code: ErrorCode::Auth(AuthCode::SessionExpired) },
    MappingRule { matches: code_mfa, code: ErrorCode::Auth(AuthCode::MfaInvalid) },
    MappingRule { matches: message_invalid_credentials, code: ErrorCode::Auth(AuthCode::InvalidCredentials) },
    MappingRule { matches: message_token_expired, code: ErrorCode::Auth(AuthCode::SessionExpired) },
    MappingRule { matches: message_token_invalid, code: ErrorCode::Auth(AuthCode::SessionInvalid) },
    MappingRule { matches: message_email_not_confirmed, code: ErrorCode::Auth(AuthCode::EmailNotVerified) },
    MappingRule { matches: message_already_registered, code: ErrorCode::User(UserCode::AlreadyExists) },
    MappingRule { matches: message_banned, code: ErrorCode::Auth(AuthCode::AccountDisabled) },
    MappingRule { matches: message_rate_limit, code: ErrorCode::Auth(AuthCode::TooManyAttempts) },
    MappingRule { matches: message_reset_expired, code: ErrorCode::Auth(AuthCode::PasswordResetExpired) },
    MappingRule { matches: message_oauth, code: ErrorCode::Auth(AuthCode::OauthFailed) },
];

/// Maps a raw auth-provider error to its canonical description.
pub fn map_auth_error(raw: &RawAuthError) -> MappedError {
    let code = first_match(RULES, raw, ErrorCode::Auth(AuthCode::Unknown));
    if code == ErrorCode::Auth(AuthCode::Unknown) {
        tracing::debug!(code = raw.code_str(), "unclassified auth error");
    }
    MappedError::of(code)
}
