//! User-facing message catalog.
//!
//! A total function from every registered code to a fixed, user-safe message.
//! Totality is a compile-time property: each category implements `message()`
//! with an exhaustive match, so registering a new code without a message does
//! not build. Raw upstream error text never appears here.

use crate::codes::{
    AiCode, AuthCode, BillCode, ClientCode, ConfigCode, CourseCode, DbCode, DocCode, EmailCode,
    ErrorCode, ExtCode, NetCode, PermCode, QuizCode, RateCode, SearchCode, StorageCode, SysCode,
    UploadCode, UserCode, ValCode,
};

impl AuthCode {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "The email or password you entered is incorrect.",
            Self::SessionExpired => "Your session has expired. Please sign in again.",
            Self::SessionInvalid => "Your session is no longer valid. Please sign in again.",
            Self::EmailNotVerified => "Please verify your email address before signing in.",
            Self::AccountLocked => {
                "Your account has been temporarily locked. Please try again later."
            }
            Self::AccountDisabled => "This account has been disabled. Please contact support.",
            Self::MfaRequired => "Additional verification is required to sign in.",
            Self::MfaInvalid => "The verification code is incorrect or has expired.",
            Self::OauthFailed => "We could not sign you in with that provider. Please try again.",
            Self::PasswordResetExpired => {
                "This password reset link has expired. Please request a new one."
            }
            Self::TooManyAttempts => "Too many attempts. Please wait a moment and try again.",
            Self::Unknown => "Something went wrong while signing you in. Please try again.",
        }
    }
}

impl PermCode {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Forbidden => "You do not have permission to perform this action.",
            Self::RoleRequired => "This action requires elevated permissions.",
            Self::NotOwner => "Only the owner of this resource can make this change.",
            Self::Unknown => "You do not have access to this resource.",
        }
    }
}

impl UserCode {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "We could not find that user.",
            Self::AlreadyExists => "An account with this email already exists.",
            Self::ProfileIncomplete => "Please complete your profile to continue.",
            Self::Unknown => "Something went wrong with your account. Please try again.",
        }
    }
}

impl CourseCode {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "We could not find that course.",
            Self::ModuleNotFound => "We could not find that module.",
            Self::LessonNotFound => "We could not find that lesson.",
            Self::AlreadyEnrolled => "You are already enrolled in this course.",
            Self::NotEnrolled => "Enroll in this course to access its content.",
            Self::EnrollmentLimit => "This course is full and not accepting new enrollments.",
            Self::GenerationFailed => "We could not generate this course. Please try again.",
            Self::PublishFailed => "We could not publish this course. Please try again.",
            Self::Archived => "This course has been archived and is read-only.",
            Self::Unknown => "Something went wrong with this course. Please try again.",
        }
    }
}

impl QuizCode {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "We could not find that quiz.",
            Self::AlreadySubmitted => "You have already submitted this quiz.",
            Self::Expired => "The time for this quiz has expired.",
            Self::GradingFailed => "We could not grade your quiz. Please try again.",
            Self::NoQuestions => "This quiz does not have any questions yet.",
            Self::Unknown => "Something went wrong with this quiz. Please try again.",
        }
    }
}

impl AiCode {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "The request to the AI service was invalid. Please try again.",
            Self::KeyInvalid => {
                "The AI service is not configured correctly. Please contact support."
            }
            Self::ContentFiltered => {
                "Your request could not be processed due to content guidelines."
            }
            Self::RateLimited => {
                "The AI service is receiving too many requests. Please try again shortly."
            }
            Self::Unavailable => "The AI service is temporarily unavailable. Please try again.",
            Self::Timeout => "The AI service took too long to respond. Please try again.",
            Self::Overloaded => {
                "The AI service is overloaded right now. Please try again in a moment."
            }
            Self::ResponseMalformed => {
                "The AI service returned an unexpected response. Please try again."
            }
            Self::ContextTooLong => {
                "Your request is too long for the AI service. Try shortening it."
            }
            Self::EmptyCompletion => {
                "The AI service returned an empty response. Please try again."
            }
            Self::Unknown => "Something went wrong with the AI service. Please try again.",
        }
    }
}

impl DbCode {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::UniqueViolation => "This item already exists.",
            Self::ForeignKeyViolation => {
                "This item is referenced by other records and cannot be changed."
            }
            Self::NotNullViolation => "A required field is missing.",
            Self::CheckViolation => "One of the provided values is not allowed.",
            Self::ConnectionFailed => {
                "We are having trouble reaching the database. Please try again."
            }
            Self::Timeout => "The request took too long to complete. Please try again.",
            Self::Deadlock => {
                "The system was busy handling conflicting updates. Please try again."
            }
            Self::SerializationFailure => {
                "Your change conflicted with another update. Please try again."
            }
            Self::NotFound => "We could not find what you were looking for.",
            Self::ConnectionLimit => "The service is at capacity right now. Please try again shortly.",
            Self::Unknown => "Something went wrong saving your data. Please try again.",
        }
    }
}

impl StorageCode {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::ObjectNotFound => "We could not find that file.",
            Self::BucketNotFound => {
                "File storage is not configured correctly. Please contact support."
            }
            Self::AccessDenied => "You do not have permission to access this file.",
            Self::QuotaExceeded => "Storage is full. Please free up space or contact support.",
            Self::PayloadTooLarge => "This file is too large to upload.",
            Self::ServiceUnavailable => {
                "File storage is temporarily unavailable. Please try again."
            }
            Self::Unknown => "Something went wrong with file storage. Please try again.",
        }
    }
}

impl UploadCode {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::TooLarge => "This file is too large. The maximum size is 50 MB.",
            Self::UnsupportedType => "This file type is not supported.",
            Self::Empty => "The uploaded file is empty.",
            Self::Corrupted => "This file appears to be corrupted and could not be read.",
            Self::Interrupted => "The upload was interrupted. Please try again.",
            Self::Unknown => "Something went wrong with your upload. Please try again.",
        }
    }
}

impl DocCode {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::ParseFailed => {
                "We could not read this document. It may be damaged or in an unexpected format."
            }
            Self::UnsupportedFormat => "This document format is not supported.",
            Self::Encrypted => {
                "This document is password-protected. Remove the password and try again."
            }
            Self::PageLimitExceeded => "This document has too many pages to process.",
            Self::ExtractionEmpty => "We could not find any readable text in this document.",
            Self::Timeout => "Processing this document took too long. Please try again.",
            Self::Unknown => "Something went wrong processing this document. Please try again.",
        }
    }
}

impl RateCode {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::LimitExceeded => "You are doing that too often. Please slow down and try again.",
            Self::QuotaExhausted => "You have reached your usage limit for today.",
            Self::ConcurrencyLimit => {
                "Too many requests are in flight. Please wait for them to finish."
            }
            Self::Unknown => "Too many requests. Please try again shortly.",
        }
    }
}

impl ValCode {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::RequiredMissing => "This field is required.",
            Self::TypeMismatch => "This value has the wrong type.",
            Self::TooShort => "This value is too short.",
            Self::TooLong => "This value is too long.",
            Self::OutOfRange => "This value is out of range.",
            Self::PatternMismatch => "This value is not in the expected format.",
            Self::InvalidChoice => "This value is not one of the allowed options.",
            Self::MalformedBody => "The request could not be understood. Please refresh and try again.",
            Self::Unknown => "Some of the provided information is invalid.",
        }
    }
}

impl ExtCode {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Unavailable => {
                "An external service is temporarily unavailable. Please try again."
            }
            Self::Timeout => "An external service took too long to respond. Please try again.",
            Self::ResponseInvalid => {
                "An external service returned an unexpected response. Please try again."
            }
            Self::AuthFailed => {
                "An external service rejected our credentials. Please contact support."
            }
            Self::Unknown => "An external service failed. Please try again.",
        }
    }
}

impl NetCode {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Unreachable => {
                "We could not reach the server. Please check your connection and try again."
            }
            Self::Timeout => "The request timed out. Please try again.",
            Self::Offline => "You appear to be offline. Please check your connection.",
            Self::Blocked => "The request was blocked by your browser's security settings.",
            Self::SecureConnectionFailed => {
                "We could not establish a secure connection. Please try again later."
            }
            Self::BadResponse => "The server returned an unexpected response. Please try again.",
            Self::Unknown => {
                "A network error occurred. Please check your connection and try again."
            }
        }
    }
}

impl ClientCode {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::RuntimeError => "Something went wrong in the app. Please refresh and try again.",
            Self::NullAccess => "Something went wrong in the app. Please refresh the page.",
            Self::StorageQuota => "Your browser storage is full. Clear some space and try again.",
            Self::ScriptLoadFailed => "Part of the app failed to load. Please refresh the page.",
            Self::Unknown => "An unexpected error occurred. Please try again.",
        }
    }
}

impl ConfigCode {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingVar => "The service is not configured correctly. Please contact support.",
            Self::InvalidValue => {
                "The service is not configured correctly. Please contact support."
            }
            Self::Unknown => "A configuration error occurred. Please contact support.",
        }
    }
}

impl SearchCode {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::IndexUnavailable => "Search is temporarily unavailable. Please try again.",
            Self::QueryInvalid => "We could not understand that search. Try different keywords.",
            Self::Unknown => "Something went wrong with search. Please try again.",
        }
    }
}

impl SysCode {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Unknown => "An unexpected error occurred. Please try again later.",
            Self::Internal => "An internal error occurred. Please try again later.",
            Self::NotImplemented => "This feature is not available yet.",
            Self::Maintenance => "The service is down for maintenance. Please try again soon.",
        }
    }
}

impl BillCode {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::PaymentRequired => "A payment is required to continue.",
            Self::SubscriptionExpired => "Your subscription has expired. Please renew to continue.",
            Self::PlanLimit => {
                "You have reached the limit of your current plan. Upgrade to continue."
            }
            Self::Unknown => "Something went wrong with billing. Please try again.",
        }
    }
}

impl EmailCode {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::SendFailed => "We could not send the email. Please try again.",
            Self::InvalidRecipient => "That email address does not look valid.",
            Self::Unknown => "Something went wrong sending email. Please try again.",
        }
    }
}

impl ErrorCode {
    /// Returns the fixed user-facing message for this code.
    #[inline]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Auth(c) => c.message(),
            Self::Perm(c) => c.message(),
            Self::User(c) => c.message(),
            Self::Course(c) => c.message(),
            Self::Quiz(c) => c.message(),
            Self::Ai(c) => c.message(),
            Self::Db(c) => c.message(),
            Self::Storage(c) => c.message(),
            Self::Upload(c) => c.message(),
            Self::Doc(c) => c.message(),
            Self::Rate(c) => c.message(),
            Self::Val(c) => c.message(),
            Self::Ext(c) => c.message(),
            Self::Net(c) => c.message(),
            Self::Client(c) => c.message(),
            Self::Config(c) => c.message(),
            Self::Search(c) => c.message(),
            Self::Sys(c) => c.message(),
            Self::Bill(c) => c.message(),
            Self::Email(c) => c.message(),
        }
    }
}

/// Resolves the message for a raw code string.
///
/// Strings outside the closed set fall back to the generic unknown message.
/// This is the defensive string-keyed entry point; prefer
/// [`ErrorCode::message`] when a typed code is in hand.
pub fn message_for(raw: &str) -> &'static str {
    ErrorCode::parse(raw)
        .unwrap_or(ErrorCode::UNKNOWN)
        .message()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_has_a_non_empty_message() {
        for code in ErrorCode::all() {
            assert!(!code.message().is_empty(), "{} has no message", code.code());
        }
    }

    #[test]
    fn unknown_strings_fall_back_to_the_generic_message() {
        assert_eq!(message_for("FL-ZZZ-999"), ErrorCode::UNKNOWN.message());
        assert_eq!(message_for(""), ErrorCode::UNKNOWN.message());
    }

    #[test]
    fn registered_strings_resolve_their_own_message() {
        assert_eq!(
            message_for("FL-QUIZ-002"),
            "You have already submitted this quiz."
        );
    }
}
