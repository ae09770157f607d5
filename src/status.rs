//! HTTP status and retryability table.
//!
//! A total function from every registered code to a concrete HTTP status,
//! plus the derived retryable verdict. Retryability defaults from the status
//! class (5xx and 429 retry) and specific codes override the default where
//! the class is misleading — a deadlock at 409 retries, a storage quota at
//! 507 does not.

use crate::codes::{
    AiCode, AuthCode, BillCode, ClientCode, ConfigCode, CourseCode, DbCode, DocCode, EmailCode,
    ErrorCode, ExtCode, NetCode, PermCode, QuizCode, RateCode, SearchCode, StorageCode, SysCode,
    UploadCode, UserCode, ValCode,
};

/// Status constants used by the table, as plain `u16` transport values.
pub mod http {
    pub const BAD_REQUEST: u16 = 400;
    pub const UNAUTHORIZED: u16 = 401;
    pub const PAYMENT_REQUIRED: u16 = 402;
    pub const FORBIDDEN: u16 = 403;
    pub const NOT_FOUND: u16 = 404;
    pub const REQUEST_TIMEOUT: u16 = 408;
    pub const CONFLICT: u16 = 409;
    pub const GONE: u16 = 410;
    pub const PAYLOAD_TOO_LARGE: u16 = 413;
    pub const UNSUPPORTED_MEDIA_TYPE: u16 = 415;
    pub const UNPROCESSABLE_ENTITY: u16 = 422;
    pub const LOCKED: u16 = 423;
    pub const TOO_MANY_REQUESTS: u16 = 429;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
    pub const NOT_IMPLEMENTED: u16 = 501;
    pub const BAD_GATEWAY: u16 = 502;
    pub const SERVICE_UNAVAILABLE: u16 = 503;
    pub const GATEWAY_TIMEOUT: u16 = 504;
    pub const INSUFFICIENT_STORAGE: u16 = 507;
}

use self::http::*;

impl AuthCode {
    pub const fn status(&self) -> u16 {
        match self {
            Self::InvalidCredentials
            | Self::SessionExpired
            | Self::SessionInvalid
            | Self::MfaRequired
            | Self::MfaInvalid
            | Self::Unknown => UNAUTHORIZED,
            Self::EmailNotVerified | Self::AccountDisabled => FORBIDDEN,
            Self::AccountLocked => LOCKED,
            Self::OauthFailed => BAD_GATEWAY,
            Self::PasswordResetExpired => GONE,
            Self::TooManyAttempts => TOO_MANY_REQUESTS,
        }
    }
}

impl PermCode {
    pub const fn status(&self) -> u16 {
        match self {
            Self::Forbidden | Self::RoleRequired | Self::NotOwner | Self::Unknown => FORBIDDEN,
        }
    }
}

impl UserCode {
    pub const fn status(&self) -> u16 {
        match self {
            Self::NotFound => NOT_FOUND,
            Self::AlreadyExists => CONFLICT,
            Self::ProfileIncomplete => BAD_REQUEST,
            Self::Unknown => INTERNAL_SERVER_ERROR,
        }
    }
}

impl CourseCode {
    pub const fn status(&self) -> u16 {
        match self {
            Self::NotFound | Self::ModuleNotFound | Self::LessonNotFound => NOT_FOUND,
            Self::AlreadyEnrolled | Self::EnrollmentLimit => CONFLICT,
            Self::NotEnrolled => FORBIDDEN,
            Self::GenerationFailed | Self::PublishFailed | Self::Unknown => INTERNAL_SERVER_ERROR,
            Self::Archived => GONE,
        }
    }
}

impl QuizCode {
    pub const fn status(&self) -> u16 {
        match self {
            Self::NotFound => NOT_FOUND,
            Self::AlreadySubmitted => CONFLICT,
            Self::Expired => GONE,
            Self::GradingFailed | Self::Unknown => INTERNAL_SERVER_ERROR,
            Self::NoQuestions => UNPROCESSABLE_ENTITY,
        }
    }
}

impl AiCode {
    pub const fn status(&self) -> u16 {
        match self {
            Self::InvalidFormat => BAD_REQUEST,
            Self::KeyInvalid | Self::Unknown => INTERNAL_SERVER_ERROR,
            Self::ContentFiltered => UNPROCESSABLE_ENTITY,
            Self::RateLimited => TOO_MANY_REQUESTS,
            Self::Unavailable | Self::ResponseMalformed | Self::EmptyCompletion => BAD_GATEWAY,
            Self::Timeout => GATEWAY_TIMEOUT,
            Self::Overloaded => SERVICE_UNAVAILABLE,
            Self::ContextTooLong => PAYLOAD_TOO_LARGE,
        }
    }
}

impl DbCode {
    pub const fn status(&self) -> u16 {
        match self {
            Self::UniqueViolation
            | Self::ForeignKeyViolation
            | Self::Deadlock
            | Self::SerializationFailure => CONFLICT,
            Self::NotNullViolation | Self::CheckViolation => BAD_REQUEST,
            Self::ConnectionFailed | Self::ConnectionLimit => SERVICE_UNAVAILABLE,
            Self::Timeout => GATEWAY_TIMEOUT,
            Self::NotFound => NOT_FOUND,
            Self::Unknown => INTERNAL_SERVER_ERROR,
        }
    }
}

impl StorageCode {
    pub const fn status(&self) -> u16 {
        match self {
            Self::ObjectNotFound => NOT_FOUND,
            Self::BucketNotFound | Self::Unknown => INTERNAL_SERVER_ERROR,
            Self::AccessDenied => FORBIDDEN,
            Self::QuotaExceeded => INSUFFICIENT_STORAGE,
            Self::PayloadTooLarge => PAYLOAD_TOO_LARGE,
            Self::ServiceUnavailable => SERVICE_UNAVAILABLE,
        }
    }
}

impl UploadCode {
    pub const fn status(&self) -> u16 {
        match self {
            Self::TooLarge => PAYLOAD_TOO_LARGE,
            Self::UnsupportedType => UNSUPPORTED_MEDIA_TYPE,
            Self::Empty => BAD_REQUEST,
            Self::Corrupted => UNPROCESSABLE_ENTITY,
            Self::Interrupted => REQUEST_TIMEOUT,
            Self::Unknown => INTERNAL_SERVER_ERROR,
        }
    }
}

impl DocCode {
    pub const fn status(&self) -> u16 {
        match self {
            Self::ParseFailed | Self::Encrypted | Self::ExtractionEmpty => UNPROCESSABLE_ENTITY,
            Self::UnsupportedFormat => UNSUPPORTED_MEDIA_TYPE,
            Self::PageLimitExceeded => PAYLOAD_TOO_LARGE,
            Self::Timeout => GATEWAY_TIMEOUT,
            Self::Unknown => INTERNAL_SERVER_ERROR,
        }
    }
}

impl RateCode {
    pub const fn status(&self) -> u16 {
        match self {
            Self::LimitExceeded | Self::QuotaExhausted | Self::ConcurrencyLimit | Self::Unknown => {
                TOO_MANY_REQUESTS
            }
        }
    }
}

impl ValCode {
    pub const fn status(&self) -> u16 {
        // Every validation failure is a malformed request.
        BAD_REQUEST
    }
}

impl ExtCode {
    pub const fn status(&self) -> u16 {
        match self {
            Self::Unavailable | Self::ResponseInvalid | Self::Unknown => BAD_GATEWAY,
            Self::Timeout => GATEWAY_TIMEOUT,
            Self::AuthFailed => INTERNAL_SERVER_ERROR,
        }
    }
}

impl NetCode {
    pub const fn status(&self) -> u16 {
        match self {
            Self::Unreachable | Self::Offline | Self::Unknown => SERVICE_UNAVAILABLE,
            Self::Timeout => GATEWAY_TIMEOUT,
            Self::Blocked => FORBIDDEN,
            Self::SecureConnectionFailed | Self::BadResponse => BAD_GATEWAY,
        }
    }
}

impl ClientCode {
    pub const fn status(&self) -> u16 {
        match self {
            Self::RuntimeError | Self::NullAccess | Self::Unknown => INTERNAL_SERVER_ERROR,
            Self::StorageQuota => INSUFFICIENT_STORAGE,
            Self::ScriptLoadFailed => SERVICE_UNAVAILABLE,
        }
    }
}

impl ConfigCode {
    pub const fn status(&self) -> u16 {
        INTERNAL_SERVER_ERROR
    }
}

impl SearchCode {
    pub const fn status(&self) -> u16 {
        match self {
            Self::IndexUnavailable => SERVICE_UNAVAILABLE,
            Self::QueryInvalid => BAD_REQUEST,
            Self::Unknown => INTERNAL_SERVER_ERROR,
        }
    }
}

impl SysCode {
    pub const fn status(&self) -> u16 {
        match self {
            Self::Unknown | Self::Internal => INTERNAL_SERVER_ERROR,
            Self::NotImplemented => NOT_IMPLEMENTED,
            Self::Maintenance => SERVICE_UNAVAILABLE,
        }
    }
}

impl BillCode {
    pub const fn status(&self) -> u16 {
        match self {
            Self::PaymentRequired | Self::SubscriptionExpired => PAYMENT_REQUIRED,
            Self::PlanLimit => FORBIDDEN,
            Self::Unknown => INTERNAL_SERVER_ERROR,
        }
    }
}

impl EmailCode {
    pub const fn status(&self) -> u16 {
        match self {
            Self::SendFailed => BAD_GATEWAY,
            Self::InvalidRecipient => BAD_REQUEST,
            Self::Unknown => INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorCode {
    /// Returns the HTTP status carried by this code.
    #[inline]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Auth(c) => c.status(),
            Self::Perm(c) => c.status(),
            Self::User(c) => c.status(),
            Self::Course(c) => c.status(),
            Self::Quiz(c) => c.status(),
            Self::Ai(c) => c.status(),
            Self::Db(c) => c.status(),
            Self::Storage(c) => c.status(),
            Self::Upload(c) => c.status(),
            Self::Doc(c) => c.status(),
            Self::Rate(c) => c.status(),
            Self::Val(c) => c.status(),
            Self::Ext(c) => c.status(),
            Self::Net(c) => c.status(),
            Self::Client(c) => c.status(),
            Self::Config(c) => c.status(),
            Self::Search(c) => c.status(),
            Self::Sys(c) => c.status(),
            Self::Bill(c) => c.status(),
            Self::Email(c) => c.status(),
        }
    }

    /// Whether retrying the same operation unchanged has a reasonable chance
    /// of succeeding.
    ///
    /// Derived from the status class, with per-code overrides where the class
    /// verdict is wrong for the specific failure.
    pub const fn is_retryable(&self) -> bool {
        match self {
            // Conflict-class statuses that are genuinely transient.
            Self::Db(DbCode::Deadlock) | Self::Db(DbCode::SerializationFailure) => true,
            // An interrupted upload can simply be restarted.
            Self::Upload(UploadCode::Interrupted) => true,

            // Server-class statuses where a retry cannot help: broken
            // deployment config, rejected credentials, exhausted quotas,
            // client-side bugs.
            Self::Ai(AiCode::KeyInvalid)
            | Self::Ext(ExtCode::AuthFailed)
            | Self::Storage(StorageCode::QuotaExceeded)
            | Self::Storage(StorageCode::BucketNotFound)
            | Self::Rate(RateCode::QuotaExhausted)
            | Self::Net(NetCode::SecureConnectionFailed)
            | Self::Client(ClientCode::RuntimeError)
            | Self::Client(ClientCode::NullAccess)
            | Self::Client(ClientCode::StorageQuota)
            | Self::Client(ClientCode::Unknown)
            | Self::Config(_)
            | Self::Bill(BillCode::Unknown)
            | Self::Sys(SysCode::Unknown)
            | Self::Sys(SysCode::NotImplemented) => false,

            _ => default_retryable(self.status()),
        }
    }
}

/// The status-class default: 5xx and 429 are worth retrying.
#[inline]
pub const fn default_retryable(status: u16) -> bool {
    status >= 500 || status == TOO_MANY_REQUESTS
}

/// Resolves the status for a raw code string, falling back to 500 for
/// strings outside the closed set.
pub fn status_for(raw: &str) -> u16 {
    ErrorCode::parse(raw).unwrap_or(ErrorCode::UNKNOWN).status()
}

/// Resolves the retryable verdict for a raw code string; unknown strings are
/// not retryable.
pub fn retryable_for(raw: &str) -> bool {
    ErrorCode::parse(raw)
        .unwrap_or(ErrorCode::UNKNOWN)
        .is_retryable()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_has_a_defined_status() {
        const DEFINED: &[u16] = &[
            400, 401, 402, 403, 404, 408, 409, 410, 413, 415, 422, 423, 429, 500, 501, 502, 503,
            504, 507,
        ];
        for code in ErrorCode::all() {
            assert!(
                DEFINED.contains(&code.status()),
                "{} carries undefined status {}",
                code.code(),
                code.status()
            );
        }
    }

    #[test]
    fn status_class_default() {
        assert!(default_retryable(500));
        assert!(default_retryable(503));
        assert!(default_retryable(429));
        assert!(!default_retryable(400));
        assert!(!default_retryable(404));
        assert!(!default_retryable(409));
    }

    #[test]
    fn deadlock_retries_despite_conflict_status() {
        let code = ErrorCode::Db(DbCode::Deadlock);
        assert_eq!(code.status(), 409);
        assert!(code.is_retryable());
    }

    #[test]
    fn malformed_request_never_retries() {
        let code = ErrorCode::Val(ValCode::MalformedBody);
        assert_eq!(code.status(), 400);
        assert!(!code.is_retryable());
    }

    #[test]
    fn timeout_retries_even_at_gateway_timeout() {
        assert!(ErrorCode::Ai(AiCode::Timeout).is_retryable());
        assert!(ErrorCode::Net(NetCode::Timeout).is_retryable());
    }

    #[test]
    fn quota_exhaustion_does_not_retry_despite_429() {
        let code = ErrorCode::Rate(RateCode::QuotaExhausted);
        assert_eq!(code.status(), 429);
        assert!(!code.is_retryable());
    }

    #[test]
    fn unknown_strings_fall_back_to_500_not_retryable() {
        assert_eq!(status_for("FL-ZZZ-999"), 500);
        assert!(!retryable_for("FL-ZZZ-999"));
    }
}
