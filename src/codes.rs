//! Canonical error code registry.
//!
//! This module defines the closed code space for the whole platform. Every
//! failure, whatever its raw source, is eventually expressed as one of the
//! codes below. Codes are namespaced strings of the form `FL-AREA-NNN`,
//! grouped into one enum per category and unioned into [`ErrorCode`], so the
//! message catalog and status table can be checked for totality by the
//! compiler rather than by convention.
//!
//! ## Categories
//!
//! | Area    | Category            | Description                               |
//! |---------|---------------------|-------------------------------------------|
//! | AUTH    | Authentication      | Sign-in, sessions, tokens                 |
//! | PERM    | Permissions         | Authorization and ownership               |
//! | USER    | Accounts            | User records and profiles                 |
//! | COURSE  | Courses             | Courses, modules, lessons, enrollment     |
//! | QUIZ    | Quizzes             | Quiz lifecycle and grading                |
//! | AI      | AI service          | Generative AI provider failures           |
//! | DB      | Database            | Driver and query failures                 |
//! | STORAGE | Object storage      | Buckets, objects, storage quotas          |
//! | UPLOAD  | Uploads             | Client file uploads                       |
//! | DOC     | Document processing | Parsing and text extraction               |
//! | RATE    | Rate limiting       | Request rates and usage quotas            |
//! | VAL     | Validation          | Schema and field validation               |
//! | EXT     | External services   | Third-party integrations                  |
//! | NET     | Network             | Client-environment network failures       |
//! | CLIENT  | Client runtime      | Browser/runtime engine failures           |
//! | CONFIG  | Configuration       | Missing or invalid deployment config      |
//! | SEARCH  | Search              | Search index and query failures           |
//! | SYS     | System              | Internal errors and the generic unknown   |
//! | BILL    | Billing             | Payments, subscriptions, plan limits      |
//! | EMAIL   | Email               | Outbound email delivery                   |
//!
//! Each category ends in an `Unknown` catch-all so classification can always
//! degrade instead of failing; the crate-wide generic unknown is `FL-SYS-000`.
//!
//! ## Example
//!
//! ```rust
//! use faultline::codes::{ErrorCode, AiCode, ErrorCategory};
//!
//! let code = ErrorCode::Ai(AiCode::RateLimited);
//! assert_eq!(code.code(), "FL-AI-004");
//! assert_eq!(code.category(), ErrorCategory::Ai);
//! assert!(ErrorCode::parse("FL-AI-004").is_some());
//! ```

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Namespace prefix shared by every canonical code.
pub const CODE_PREFIX: &str = "FL";

/// Authentication failures (`FL-AUTH-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthCode {
    /// FL-AUTH-001: The supplied credentials were rejected
    InvalidCredentials,
    /// FL-AUTH-002: The session lifetime elapsed
    SessionExpired,
    /// FL-AUTH-003: The session token failed verification
    SessionInvalid,
    /// FL-AUTH-004: The account's email address is unverified
    EmailNotVerified,
    /// FL-AUTH-005: The account is temporarily locked after repeated failures
    AccountLocked,
    /// FL-AUTH-006: The account was disabled by an administrator
    AccountDisabled,
    /// FL-AUTH-007: A second authentication factor is required
    MfaRequired,
    /// FL-AUTH-008: The second-factor code was wrong or stale
    MfaInvalid,
    /// FL-AUTH-009: The OAuth/OIDC provider handshake failed
    OauthFailed,
    /// FL-AUTH-010: The password reset link is no longer valid
    PasswordResetExpired,
    /// FL-AUTH-011: Too many sign-in or OTP attempts in a short window
    TooManyAttempts,
    /// FL-AUTH-099: Unclassified authentication failure
    Unknown,
}

/// Authorization failures (`FL-PERM-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermCode {
    /// FL-PERM-001: The caller lacks permission for the action
    Forbidden,
    /// FL-PERM-002: The action requires a higher role
    RoleRequired,
    /// FL-PERM-003: Only the resource owner may perform the action
    NotOwner,
    /// FL-PERM-099: Unclassified authorization failure
    Unknown,
}

/// Account failures (`FL-USER-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserCode {
    /// FL-USER-001: No user record matches the identifier
    NotFound,
    /// FL-USER-002: An account with the same email already exists
    AlreadyExists,
    /// FL-USER-003: Required profile fields are missing
    ProfileIncomplete,
    /// FL-USER-099: Unclassified account failure
    Unknown,
}

/// Course-domain failures (`FL-COURSE-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseCode {
    /// FL-COURSE-001: No course matches the identifier
    NotFound,
    /// FL-COURSE-002: No module matches the identifier
    ModuleNotFound,
    /// FL-COURSE-003: No lesson matches the identifier
    LessonNotFound,
    /// FL-COURSE-004: The caller is already enrolled
    AlreadyEnrolled,
    /// FL-COURSE-005: The caller is not enrolled
    NotEnrolled,
    /// FL-COURSE-006: The course has reached its enrollment limit
    EnrollmentLimit,
    /// FL-COURSE-007: Course generation did not complete
    GenerationFailed,
    /// FL-COURSE-008: The course could not be published
    PublishFailed,
    /// FL-COURSE-009: The course is archived and read-only
    Archived,
    /// FL-COURSE-099: Unclassified course failure
    Unknown,
}

/// Quiz failures (`FL-QUIZ-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizCode {
    /// FL-QUIZ-001: No quiz matches the identifier
    NotFound,
    /// FL-QUIZ-002: The quiz was already submitted
    AlreadySubmitted,
    /// FL-QUIZ-003: The quiz window has closed
    Expired,
    /// FL-QUIZ-004: Automatic grading failed
    GradingFailed,
    /// FL-QUIZ-005: The quiz has no questions
    NoQuestions,
    /// FL-QUIZ-099: Unclassified quiz failure
    Unknown,
}

/// Generative-AI provider failures (`FL-AI-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AiCode {
    /// FL-AI-001: The provider rejected the request as malformed
    InvalidFormat,
    /// FL-AI-002: The provider rejected our API key
    KeyInvalid,
    /// FL-AI-003: The provider's content filter blocked the request
    ContentFiltered,
    /// FL-AI-004: The provider rate-limited the request
    RateLimited,
    /// FL-AI-005: The provider returned a server error
    Unavailable,
    /// FL-AI-006: The provider did not respond in time
    Timeout,
    /// FL-AI-007: The provider reported overload
    Overloaded,
    /// FL-AI-008: The provider response could not be parsed
    ResponseMalformed,
    /// FL-AI-009: The prompt exceeds the provider's context window
    ContextTooLong,
    /// FL-AI-010: The provider returned an empty completion
    EmptyCompletion,
    /// FL-AI-099: Unclassified AI-service failure
    Unknown,
}

/// Database failures (`FL-DB-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbCode {
    /// FL-DB-001: Unique constraint violation (SQLSTATE 23505)
    UniqueViolation,
    /// FL-DB-002: Foreign key constraint violation (SQLSTATE 23503)
    ForeignKeyViolation,
    /// FL-DB-003: Not-null constraint violation (SQLSTATE 23502)
    NotNullViolation,
    /// FL-DB-004: Check constraint violation (SQLSTATE 23514)
    CheckViolation,
    /// FL-DB-005: The connection to the database failed (SQLSTATE 08xxx)
    ConnectionFailed,
    /// FL-DB-006: The statement was cancelled for running too long
    Timeout,
    /// FL-DB-007: The transaction was chosen as a deadlock victim (40P01)
    Deadlock,
    /// FL-DB-008: The transaction could not be serialized (SQLSTATE 40001)
    SerializationFailure,
    /// FL-DB-009: A single-row query matched no rows
    NotFound,
    /// FL-DB-010: The connection pool or server connection limit was hit
    ConnectionLimit,
    /// FL-DB-099: Unclassified database failure
    Unknown,
}

/// Object-storage failures (`FL-STORAGE-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageCode {
    /// FL-STORAGE-001: No object at the requested key
    ObjectNotFound,
    /// FL-STORAGE-002: The configured bucket does not exist
    BucketNotFound,
    /// FL-STORAGE-003: The storage provider denied access
    AccessDenied,
    /// FL-STORAGE-004: The storage quota is exhausted
    QuotaExceeded,
    /// FL-STORAGE-005: The object exceeds the provider's size limit
    PayloadTooLarge,
    /// FL-STORAGE-006: The storage provider is unavailable
    ServiceUnavailable,
    /// FL-STORAGE-099: Unclassified storage failure
    Unknown,
}

/// Upload failures (`FL-UPLOAD-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadCode {
    /// FL-UPLOAD-001: The file exceeds the upload size limit
    TooLarge,
    /// FL-UPLOAD-002: The file type is not accepted
    UnsupportedType,
    /// FL-UPLOAD-003: The uploaded file has zero length
    Empty,
    /// FL-UPLOAD-004: The file content failed integrity checks
    Corrupted,
    /// FL-UPLOAD-005: The upload stream ended before completion
    Interrupted,
    /// FL-UPLOAD-099: Unclassified upload failure
    Unknown,
}

/// Document-processing failures (`FL-DOC-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocCode {
    /// FL-DOC-001: The document could not be parsed
    ParseFailed,
    /// FL-DOC-002: The document format is not supported
    UnsupportedFormat,
    /// FL-DOC-003: The document is password-protected
    Encrypted,
    /// FL-DOC-004: The document exceeds the page limit
    PageLimitExceeded,
    /// FL-DOC-005: No extractable text was found
    ExtractionEmpty,
    /// FL-DOC-006: Processing exceeded its time budget
    Timeout,
    /// FL-DOC-099: Unclassified document-processing failure
    Unknown,
}

/// Rate-limiting verdicts (`FL-RATE-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateCode {
    /// FL-RATE-001: Per-window request limit exceeded
    LimitExceeded,
    /// FL-RATE-002: The account's usage quota is exhausted
    QuotaExhausted,
    /// FL-RATE-003: Too many concurrent requests in flight
    ConcurrencyLimit,
    /// FL-RATE-099: Unclassified rate-limit failure
    Unknown,
}

/// Validation failures (`FL-VAL-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValCode {
    /// FL-VAL-001: A required field is absent
    RequiredMissing,
    /// FL-VAL-002: A field has the wrong type
    TypeMismatch,
    /// FL-VAL-003: A value is below its minimum length
    TooShort,
    /// FL-VAL-004: A value exceeds its maximum length
    TooLong,
    /// FL-VAL-005: A numeric value is outside its allowed range
    OutOfRange,
    /// FL-VAL-006: A value does not match its expected format
    PatternMismatch,
    /// FL-VAL-007: A value is not one of the allowed options
    InvalidChoice,
    /// FL-VAL-008: The request body could not be decoded at all
    MalformedBody,
    /// FL-VAL-099: Unclassified validation failure
    Unknown,
}

/// External-service failures (`FL-EXT-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtCode {
    /// FL-EXT-001: The external service is down or erroring
    Unavailable,
    /// FL-EXT-002: The external service did not respond in time
    Timeout,
    /// FL-EXT-003: The external service returned an unparseable response
    ResponseInvalid,
    /// FL-EXT-004: The external service rejected our credentials
    AuthFailed,
    /// FL-EXT-099: Unclassified external-service failure
    Unknown,
}

/// Client-environment network failures (`FL-NET-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetCode {
    /// FL-NET-001: The server could not be reached (includes DNS failures)
    Unreachable,
    /// FL-NET-002: The request timed out or was aborted before completing
    Timeout,
    /// FL-NET-003: The client is offline
    Offline,
    /// FL-NET-004: The request was blocked by cross-origin policy
    Blocked,
    /// FL-NET-005: A secure connection could not be established
    SecureConnectionFailed,
    /// FL-NET-006: The response body was malformed
    BadResponse,
    /// FL-NET-099: Unclassified network failure
    Unknown,
}

/// Client runtime failures (`FL-CLIENT-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientCode {
    /// FL-CLIENT-001: The runtime engine raised an internal error
    RuntimeError,
    /// FL-CLIENT-002: A null/undefined value was dereferenced
    NullAccess,
    /// FL-CLIENT-003: Browser storage quota was exceeded
    StorageQuota,
    /// FL-CLIENT-004: A required script or chunk failed to load
    ScriptLoadFailed,
    /// FL-CLIENT-099: Unclassified client failure; also the legacy-envelope fallback
    Unknown,
}

/// Deployment configuration failures (`FL-CONFIG-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigCode {
    /// FL-CONFIG-001: A required environment variable is unset
    MissingVar,
    /// FL-CONFIG-002: A configuration value failed validation
    InvalidValue,
    /// FL-CONFIG-099: Unclassified configuration failure
    Unknown,
}

/// Search failures (`FL-SEARCH-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchCode {
    /// FL-SEARCH-001: The search index is unavailable
    IndexUnavailable,
    /// FL-SEARCH-002: The query could not be parsed
    QueryInvalid,
    /// FL-SEARCH-099: Unclassified search failure
    Unknown,
}

/// System-level failures (`FL-SYS-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SysCode {
    /// FL-SYS-000: The crate-wide generic unknown; the defensive fallback
    Unknown,
    /// FL-SYS-001: An unclassified internal error
    Internal,
    /// FL-SYS-002: The requested feature is not implemented
    NotImplemented,
    /// FL-SYS-003: The service is in scheduled maintenance
    Maintenance,
}

/// Billing failures (`FL-BILL-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillCode {
    /// FL-BILL-001: Payment is required before proceeding
    PaymentRequired,
    /// FL-BILL-002: The subscription has lapsed
    SubscriptionExpired,
    /// FL-BILL-003: The current plan's limit was reached
    PlanLimit,
    /// FL-BILL-099: Unclassified billing failure
    Unknown,
}

/// Outbound email failures (`FL-EMAIL-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailCode {
    /// FL-EMAIL-001: The mail provider refused or dropped the message
    SendFailed,
    /// FL-EMAIL-002: The recipient address is not deliverable
    InvalidRecipient,
    /// FL-EMAIL-099: Unclassified email failure
    Unknown,
}

macro_rules! code_strings {
    ($ty:ident, $($variant:ident => $code:literal),+ $(,)?) => {
        impl $ty {
            /// Returns the canonical code string.
            #[inline]
            pub const fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            /// All codes in this category, in declaration order.
            pub const ALL: &'static [$ty] = &[$(Self::$variant),+];
        }
    };
}

code_strings!(AuthCode,
    InvalidCredentials => "FL-AUTH-001",
    SessionExpired => "FL-AUTH-002",
    SessionInvalid => "FL-AUTH-003",
    EmailNotVerified => "FL-AUTH-004",
    AccountLocked => "FL-AUTH-005",
    AccountDisabled => "FL-AUTH-006",
    MfaRequired => "FL-AUTH-007",
    MfaInvalid => "FL-AUTH-008",
    OauthFailed => "FL-AUTH-009",
    PasswordResetExpired => "FL-AUTH-010",
    TooManyAttempts => "FL-AUTH-011",
    Unknown => "FL-AUTH-099",
);

code_strings!(PermCode,
    Forbidden => "FL-PERM-001",
    RoleRequired => "FL-PERM-002",
    NotOwner => "FL-PERM-003",
    Unknown => "FL-PERM-099",
);

code_strings!(UserCode,
    NotFound => "FL-USER-001",
    AlreadyExists => "FL-USER-002",
    ProfileIncomplete => "FL-USER-003",
    Unknown => "FL-USER-099",
);

code_strings!(CourseCode,
    NotFound => "FL-COURSE-001",
    ModuleNotFound => "FL-COURSE-002",
    LessonNotFound => "FL-COURSE-003",
    AlreadyEnrolled => "FL-COURSE-004",
    NotEnrolled => "FL-COURSE-005",
    EnrollmentLimit => "FL-COURSE-006",
    GenerationFailed => "FL-COURSE-007",
    PublishFailed => "FL-COURSE-008",
    Archived => "FL-COURSE-009",
    Unknown => "FL-COURSE-099",
);

code_strings!(QuizCode,
    NotFound => "FL-QUIZ-001",
    AlreadySubmitted => "FL-QUIZ-002",
    Expired => "FL-QUIZ-003",
    GradingFailed => "FL-QUIZ-004",
    NoQuestions => "FL-QUIZ-005",
    Unknown => "FL-QUIZ-099",
);

code_strings!(AiCode,
    InvalidFormat => "FL-AI-001",
    KeyInvalid => "FL-AI-002",
    ContentFiltered => "FL-AI-003",
    RateLimited => "FL-AI-004",
    Unavailable => "FL-AI-005",
    Timeout => "FL-AI-006",
    Overloaded => "FL-AI-007",
    ResponseMalformed => "FL-AI-008",
    ContextTooLong => "FL-AI-009",
    EmptyCompletion => "FL-AI-010",
    Unknown => "FL-AI-099",
);

code_strings!(DbCode,
    UniqueViolation => "FL-DB-001",
    ForeignKeyViolation => "FL-DB-002",
    NotNullViolation => "FL-DB-003",
    CheckViolation => "FL-DB-004",
    ConnectionFailed => "FL-DB-005",
    Timeout => "FL-DB-006",
    Deadlock => "FL-DB-007",
    SerializationFailure => "FL-DB-008",
    NotFound => "FL-DB-009",
    ConnectionLimit => "FL-DB-010",
    Unknown => "FL-DB-099",
);

code_strings!(StorageCode,
    ObjectNotFound => "FL-STORAGE-001",
    BucketNotFound => "FL-STORAGE-002",
    AccessDenied => "FL-STORAGE-003",
    QuotaExceeded => "FL-STORAGE-004",
    PayloadTooLarge => "FL-STORAGE-005",
    ServiceUnavailable => "FL-STORAGE-006",
    Unknown => "FL-STORAGE-099",
);

code_strings!(UploadCode,
    TooLarge => "FL-UPLOAD-001",
    UnsupportedType => "FL-UPLOAD-002",
    Empty => "FL-UPLOAD-003",
    Corrupted => "FL-UPLOAD-004",
    Interrupted => "FL-UPLOAD-005",
    Unknown => "FL-UPLOAD-099",
);

code_strings!(DocCode,
    ParseFailed => "FL-DOC-001",
    UnsupportedFormat => "FL-DOC-002",
    Encrypted => "FL-DOC-003",
    PageLimitExceeded => "FL-DOC-004",
    ExtractionEmpty => "FL-DOC-005",
    Timeout => "FL-DOC-006",
    Unknown => "FL-DOC-099",
);

code_strings!(RateCode,
    LimitExceeded => "FL-RATE-001",
    QuotaExhausted => "FL-RATE-002",
    ConcurrencyLimit => "FL-RATE-003",
    Unknown => "FL-RATE-099",
);

code_strings!(ValCode,
    RequiredMissing => "FL-VAL-001",
    TypeMismatch => "FL-VAL-002",
    TooShort => "FL-VAL-003",
    TooLong => "FL-VAL-004",
    OutOfRange => "FL-VAL-005",
    PatternMismatch => "FL-VAL-006",
    InvalidChoice => "FL-VAL-007",
    MalformedBody => "FL-VAL-008",
    Unknown => "FL-VAL-099",
);

code_strings!(ExtCode,
    Unavailable => "FL-EXT-001",
    Timeout => "FL-EXT-002",
    ResponseInvalid => "FL-EXT-003",
    AuthFailed => "FL-EXT-004",
    Unknown => "FL-EXT-099",
);

code_strings!(NetCode,
    Unreachable => "FL-NET-001",
    Timeout => "FL-NET-002",
    Offline => "FL-NET-003",
    Blocked => "FL-NET-004",
    SecureConnectionFailed => "FL-NET-005",
    BadResponse => "FL-NET-006",
    Unknown => "FL-NET-099",
);

code_strings!(ClientCode,
    RuntimeError => "FL-CLIENT-001",
    NullAccess => "FL-CLIENT-002",
    StorageQuota => "FL-CLIENT-003",
    ScriptLoadFailed => "FL-CLIENT-004",
    Unknown => "FL-CLIENT-099",
);

code_strings!(ConfigCode,
    MissingVar => "FL-CONFIG-001",
    InvalidValue => "FL-CONFIG-002",
    Unknown => "FL-CONFIG-099",
);

code_strings!(SearchCode,
    IndexUnavailable => "FL-SEARCH-001",
    QueryInvalid => "FL-SEARCH-002",
    Unknown => "FL-SEARCH-099",
);

code_strings!(SysCode,
    Unknown => "FL-SYS-000",
    Internal => "FL-SYS-001",
    NotImplemented => "FL-SYS-002",
    Maintenance => "FL-SYS-003",
);

code_strings!(BillCode,
    PaymentRequired => "FL-BILL-001",
    SubscriptionExpired => "FL-BILL-002",
    PlanLimit => "FL-BILL-003",
    Unknown => "FL-BILL-099",
);

code_strings!(EmailCode,
    SendFailed => "FL-EMAIL-001",
    InvalidRecipient => "FL-EMAIL-002",
    Unknown => "FL-EMAIL-099",
);

/// The master code type: every canonical code, unioned across categories.
///
/// The message catalog and status table match exhaustively on this type, so
/// adding a code without a message or status is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Auth(AuthCode),
    Perm(PermCode),
    User(UserCode),
    Course(CourseCode),
    Quiz(QuizCode),
    Ai(AiCode),
    Db(DbCode),
    Storage(StorageCode),
    Upload(UploadCode),
    Doc(DocCode),
    Rate(RateCode),
    Val(ValCode),
    Ext(ExtCode),
    Net(NetCode),
    Client(ClientCode),
    Config(ConfigCode),
    Search(SearchCode),
    Sys(SysCode),
    Bill(BillCode),
    Email(EmailCode),
}

/// The `AREA` segment of a canonical code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Auth,
    Perm,
    User,
    Course,
    Quiz,
    Ai,
    Db,
    Storage,
    Upload,
    Doc,
    Rate,
    Val,
    Ext,
    Net,
    Client,
    Config,
    Search,
    Sys,
    Bill,
    Email,
}

impl ErrorCategory {
    /// Returns the `AREA` segment string (e.g. `"AUTH"`).
    #[inline]
    pub const fn as_area(&self) -> &'static str {
        match self {
            Self::Auth => "AUTH",
            Self::Perm => "PERM",
            Self::User => "USER",
            Self::Course => "COURSE",
            Self::Quiz => "QUIZ",
            Self::Ai => "AI",
            Self::Db => "DB",
            Self::Storage => "STORAGE",
            Self::Upload => "UPLOAD",
            Self::Doc => "DOC",
            Self::Rate => "RATE",
            Self::Val => "VAL",
            Self::Ext => "EXT",
            Self::Net => "NET",
            Self::Client => "CLIENT",
            Self::Config => "CONFIG",
            Self::Search => "SEARCH",
            Self::Sys => "SYS",
            Self::Bill => "BILL",
            Self::Email => "EMAIL",
        }
    }

    /// Resolves an `AREA` segment back to its category.
    pub fn from_area(area: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.as_area() == area)
    }

    /// Every category, in registry order.
    pub const fn all() -> &'static [ErrorCategory] {
        &[
            Self::Auth,
            Self::Perm,
            Self::User,
            Self::Course,
            Self::Quiz,
            Self::Ai,
            Self::Db,
            Self::Storage,
            Self::Upload,
            Self::Doc,
            Self::Rate,
            Self::Val,
            Self::Ext,
            Self::Net,
            Self::Client,
            Self::Config,
            Self::Search,
            Self::Sys,
            Self::Bill,
            Self::Email,
        ]
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_area())
    }
}

/// A code string that does not belong to the canonical format.
///
/// Raised only by [`category_of`], which treats malformed input as a
/// programmer error rather than a runtime condition to degrade on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodeFormatError {
    #[error("malformed error code `{0}` (expected FL-AREA-NNN)")]
    Malformed(String),

    #[error("error code `{code}` names unknown category `{area}`")]
    UnknownArea { code: String, area: String },
}

static CODE_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{CODE_PREFIX}-([A-Z]+)-\d{{3}}$")).expect("code format regex")
});

static CODE_INDEX: Lazy<HashMap<&'static str, ErrorCode>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for code in ErrorCode::all() {
        let previous = index.insert(code.code(), *code);
        debug_assert!(previous.is_none(), "duplicate code string {}", code.code());
    }
    index
});

static ALL_CODES: Lazy<Vec<ErrorCode>> = Lazy::new(|| {
    let mut all = Vec::new();
    all.extend(AuthCode::ALL.iter().copied().map(ErrorCode::Auth));
    all.extend(PermCode::ALL.iter().copied().map(ErrorCode::Perm));
    all.extend(UserCode::ALL.iter().copied().map(ErrorCode::User));
    all.extend(CourseCode::ALL.iter().copied().map(ErrorCode::Course));
    all.extend(QuizCode::ALL.iter().copied().map(ErrorCode::Quiz));
    all.extend(AiCode::ALL.iter().copied().map(ErrorCode::Ai));
    all.extend(DbCode::ALL.iter().copied().map(ErrorCode::Db));
    all.extend(StorageCode::ALL.iter().copied().map(ErrorCode::Storage));
    all.extend(UploadCode::ALL.iter().copied().map(ErrorCode::Upload));
    all.extend(DocCode::ALL.iter().copied().map(ErrorCode::Doc));
    all.extend(RateCode::ALL.iter().copied().map(ErrorCode::Rate));
    all.extend(ValCode::ALL.iter().copied().map(ErrorCode::Val));
    all.extend(ExtCode::ALL.iter().copied().map(ErrorCode::Ext));
    all.extend(NetCode::ALL.iter().copied().map(ErrorCode::Net));
    all.extend(ClientCode::ALL.iter().copied().map(ErrorCode::Client));
    all.extend(ConfigCode::ALL.iter().copied().map(ErrorCode::Config));
    all.extend(SearchCode::ALL.iter().copied().map(ErrorCode::Search));
    all.extend(SysCode::ALL.iter().copied().map(ErrorCode::Sys));
    all.extend(BillCode::ALL.iter().copied().map(ErrorCode::Bill));
    all.extend(EmailCode::ALL.iter().copied().map(ErrorCode::Email));
    all
});

impl ErrorCode {
    /// The crate-wide generic unknown (`FL-SYS-000`).
    pub const UNKNOWN: ErrorCode = ErrorCode::Sys(SysCode::Unknown);

    /// Returns the canonical code string (e.g. `"FL-AI-004"`).
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Auth(c) => c.code(),
            Self::Perm(c) => c.code(),
            Self::User(c) => c.code(),
            Self::Course(c) => c.code(),
            Self::Quiz(c) => c.code(),
            Self::Ai(c) => c.code(),
            Self::Db(c) => c.code(),
            Self::Storage(c) => c.code(),
            Self::Upload(c) => c.code(),
            Self::Doc(c) => c.code(),
            Self::Rate(c) => c.code(),
            Self::Val(c) => c.code(),
            Self::Ext(c) => c.code(),
            Self::Net(c) => c.code(),
            Self::Client(c) => c.code(),
            Self::Config(c) => c.code(),
            Self::Search(c) => c.code(),
            Self::Sys(c) => c.code(),
            Self::Bill(c) => c.code(),
            Self::Email(c) => c.code(),
        }
    }

    /// Returns the category this code belongs to.
    #[inline]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Auth(_) => ErrorCategory::Auth,
            Self::Perm(_) => ErrorCategory::Perm,
            Self::User(_) => ErrorCategory::User,
            Self::Course(_) => ErrorCategory::Course,
            Self::Quiz(_) => ErrorCategory::Quiz,
            Self::Ai(_) => ErrorCategory::Ai,
            Self::Db(_) => ErrorCategory::Db,
            Self::Storage(_) => ErrorCategory::Storage,
            Self::Upload(_) => ErrorCategory::Upload,
            Self::Doc(_) => ErrorCategory::Doc,
            Self::Rate(_) => ErrorCategory::Rate,
            Self::Val(_) => ErrorCategory::Val,
            Self::Ext(_) => ErrorCategory::Ext,
            Self::Net(_) => ErrorCategory::Net,
            Self::Client(_) => ErrorCategory::Client,
            Self::Config(_) => ErrorCategory::Config,
            Self::Search(_) => ErrorCategory::Search,
            Self::Sys(_) => ErrorCategory::Sys,
            Self::Bill(_) => ErrorCategory::Bill,
            Self::Email(_) => ErrorCategory::Email,
        }
    }

    /// Every registered code, in category order.
    pub fn all() -> &'static [ErrorCode] {
        &ALL_CODES
    }

    /// Looks up a code string by set membership.
    ///
    /// Returns `None` for anything outside the closed set, including strings
    /// that merely *look* like codes. Use this to validate externally-sourced
    /// strings before trusting them.
    pub fn parse(raw: &str) -> Option<ErrorCode> {
        CODE_INDEX.get(raw).copied()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ErrorCode::parse(&raw)
            .ok_or_else(|| D::Error::custom(format!("unregistered error code `{raw}`")))
    }
}

/// Whether `raw` is a member of the closed code set.
pub fn is_valid_code(raw: &str) -> bool {
    CODE_INDEX.contains_key(raw)
}

/// Extracts the category from a code string via the fixed `FL-AREA-NNN` format.
///
/// Unlike the mappers, this *fails* on malformed input: any code reaching this
/// function should have come from the closed set, so a format mismatch is a
/// bug in the caller, not a runtime condition to degrade on.
pub fn category_of(raw: &str) -> Result<ErrorCategory, CodeFormatError> {
    let captures = CODE_FORMAT
        .captures(raw)
        .ok_or_else(|| CodeFormatError::Malformed(raw.to_string()))?;
    let area = &captures[1];
    ErrorCategory::from_area(area).ok_or_else(|| CodeFormatError::UnknownArea {
        code: raw.to_string(),
        area: area.to_string(),
    })
}

/// Whether `raw` is a registered code belonging to `category`.
pub fn is_error_category(raw: &str, category: ErrorCategory) -> bool {
    ErrorCode::parse(raw).map(|c| c.category()) == Some(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_strings_follow_the_fixed_format() {
        for code in ErrorCode::all() {
            assert!(
                CODE_FORMAT.is_match(code.code()),
                "code {} violates FL-AREA-NNN",
                code.code()
            );
        }
    }

    #[test]
    fn parse_round_trips_every_code() {
        for code in ErrorCode::all() {
            assert_eq!(ErrorCode::parse(code.code()), Some(*code));
        }
    }

    #[test]
    fn parse_rejects_outsiders() {
        assert_eq!(ErrorCode::parse("FL-ZZZ-999"), None);
        assert_eq!(ErrorCode::parse("FL-AUTH-998"), None);
        assert_eq!(ErrorCode::parse("not a code"), None);
        assert!(!is_valid_code("FL-AI-004 "));
    }

    #[test]
    fn category_of_matches_the_area_segment() {
        for code in ErrorCode::all() {
            let category = category_of(code.code()).unwrap();
            assert_eq!(category, code.category());
            assert!(is_error_category(code.code(), category));
        }
    }

    #[test]
    fn category_of_fails_loudly_on_malformed_input() {
        assert!(matches!(
            category_of("AUTH-001"),
            Err(CodeFormatError::Malformed(_))
        ));
        assert!(matches!(
            category_of("FL-auth-001"),
            Err(CodeFormatError::Malformed(_))
        ));
        assert!(matches!(
            category_of("FL-ZZZ-001"),
            Err(CodeFormatError::UnknownArea { .. })
        ));
    }

    #[test]
    fn code_strings_are_globally_unique() {
        let mut seen = std::collections::HashSet::new();
        for code in ErrorCode::all() {
            assert!(seen.insert(code.code()), "duplicate code {}", code.code());
        }
    }

    #[test]
    fn serde_round_trip_uses_the_code_string() {
        let code = ErrorCode::Ai(AiCode::RateLimited);
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"FL-AI-004\"");
        let back: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
        assert!(serde_json::from_str::<ErrorCode>("\"FL-ZZZ-999\"").is_err());
    }
}
