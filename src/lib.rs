//! # faultline
//!
//! Canonical error classification: one closed taxonomy of error codes, each
//! carrying a fixed HTTP status, a user-facing message, and a retryability
//! verdict, fed by mappers for every failure source the platform sees.
//!
//! ## Overview
//!
//! Failures arrive in wildly different shapes — database driver errors with
//! SQLSTATE codes, auth and storage provider errors, generative-AI API
//! failures, schema-validation issue lists, and freeform runtime messages
//! with vendor-specific wording. This crate normalizes all of them into one
//! closed code space so that every endpoint answers with the same envelope,
//! every user sees a catalog message instead of internal error text, and
//! every UI can decide whether a retry is worth offering.
//!
//! ## Core Philosophy
//!
//! - **Closed taxonomy**: every code is enumerated; the message catalog and
//!   status table are total by compile-time exhaustiveness, not convention
//! - **Ordered rules as data**: mappers walk explicit first-match-wins rule
//!   lists, structured signals before message text
//! - **Never leak**: raw upstream text reaches logs, never users
//! - **Pure and stateless**: classification is a pure function of its input;
//!   any number of requests may classify concurrently
//!
//! ## Quick Start
//!
//! ```rust
//! use faultline::envelope::create_error_response;
//! use faultline::mappers::{map_database_error, RawDbError};
//!
//! let raw = RawDbError::new("23505", "duplicate key value violates \"users_email_key\"");
//! let mapped = map_database_error(&raw);
//! assert_eq!(mapped.code.code(), "FL-DB-001");
//! assert!(!mapped.retryable);
//!
//! let response = create_error_response(mapped.code, None);
//! assert_eq!(response.status, 409);
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`codes`] | The closed code registry and category taxonomy |
//! | [`catalog`] | Total code → user-facing message catalog |
//! | [`status`] | Total code → HTTP status table and retry verdicts |
//! | [`envelope`] | Canonical success/error API response envelopes |
//! | [`mappers`] | Per-source raw-error → canonical-code mappers |
//! | [`normalize`] | Client-side normalization and display strings |
//! | [`logging`] | Structured log entries and the tracing sink |

pub mod catalog;
pub mod codes;
pub mod envelope;
pub mod logging;
pub mod mappers;
pub mod normalize;
pub mod status;

// Re-export main types for convenience
pub use catalog::message_for;
pub use codes::{
    category_of, is_error_category, is_valid_code, CodeFormatError, ErrorCategory, ErrorCode,
};
pub use envelope::{
    create_error_response, create_success_response, ApiErrorResponse, ApiSuccessResponse,
};
pub use logging::{init_logging, log_and_respond, log_error, LogContext, StructuredLogEntry};
pub use mappers::{map_unknown_source, MappedError};
pub use normalize::{display_error, is_retryable_failure, parse_api_error, DisplayOptions};
pub use status::{default_retryable, retryable_for, status_for};
