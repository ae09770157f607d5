//! Structured error logging.
//!
//! Builds one [`StructuredLogEntry`] per failure and hands it to the
//! `tracing` sink. The entry carries the canonical code, the catalog
//! message, request context, and — outside production — the original
//! error's stack detail. What the sink does with the record (JSON lines in
//! production, human-readable in development) is configured once via
//! [`init_logging`].

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::codes::ErrorCode;
use crate::envelope::{create_error_response, ApiErrorResponse};

fn timestamp() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// Deployment environment, resolved once from `FAULTLINE_ENV`.
///
/// Unset defaults to development in debug builds and production otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

static CURRENT_ENV: Lazy<Environment> = Lazy::new(Environment::detect);

impl Environment {
    fn detect() -> Self {
        match env::var("FAULTLINE_ENV").ok().as_deref() {
            Some("production") => Self::Production,
            Some(_) => Self::Development,
            None => {
                if cfg!(debug_assertions) {
                    Self::Development
                } else {
                    Self::Production
                }
            }
        }
    }

    pub fn current() -> Self {
        *CURRENT_ENV
    }
}

/// Caller-supplied request context attached to a log entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl LogContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    pub fn with_user_id(mut self, id: impl Into<String>) -> Self {
        self.user_id = Some(id.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }
}

/// The upstream error as captured for the log, never for the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OriginalError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl OriginalError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: None,
        }
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}

/// One failure, as handed to the logging sink. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredLogEntry {
    pub code: ErrorCode,
    pub message: String,
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<LogContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_error: Option<OriginalError>,
}

fn build_entry(
    code: ErrorCode,
    original: Option<OriginalError>,
    context: Option<LogContext>,
    environment: Environment,
) -> StructuredLogEntry {
    let original_error = original.map(|mut original| {
        if environment == Environment::Production {
            original.stack = None;
        }
        original
    });
    StructuredLogEntry {
        code,
        message: code.message().to_owned(),
        timestamp: timestamp(),
        context,
        original_error,
    }
}

/// Builds the log entry for `code` and emits it through `tracing`.
///
/// Returns the entry so callers can forward it to additional sinks.
pub fn log_error(
    code: ErrorCode,
    original: Option<OriginalError>,
    context: Option<LogContext>,
) -> StructuredLogEntry {
    let entry = build_entry(code, original, context, Environment::current());
    tracing::error!(
        code = entry.code.code(),
        status = entry.code.status(),
        retryable = entry.code.is_retryable(),
        user_message = %entry.message,
        request_id = entry.context.as_ref().and_then(|c| c.request_id.as_deref()),
        user_id = entry.context.as_ref().and_then(|c| c.user_id.as_deref()),
        path = entry.context.as_ref().and_then(|c| c.path.as_deref()),
        method = entry.context.as_ref().and_then(|c| c.method.as_deref()),
        original = entry.original_error.as_ref().map(|o| o.message.as_str()),
        "request failed"
    );
    entry
}

/// Logs the failure and builds its response envelope in one call.
pub fn log_and_respond(
    code: ErrorCode,
    original: Option<OriginalError>,
    context: Option<LogContext>,
    custom_message: Option<&str>,
) -> ApiErrorResponse {
    log_error(code, original, context);
    create_error_response(code, custom_message)
}

/// Installs the global `tracing` subscriber: JSON, one object per line, in
/// production; human-readable output in development. `RUST_LOG` narrows the
/// filter in both.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match Environment::current() {
        Environment::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .try_init()
                .ok();
        }
        Environment::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .try_init()
                .ok();
        }
    }
}
