//! Boundary response envelope.
//!
//! Transports wrap every outcome as `{"success": true, "result": ...}` or
//! `{"success": false, "error": "..."}` and classify failures as client or
//! server errors.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Who is at fault for a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The request itself was invalid.
    Client,
    /// Processing failed.
    Server,
}

impl ErrorClass {
    /// Classify an analysis failure.
    pub fn of(err: &AnalysisError) -> Self {
        if err.is_invalid_input() {
            Self::Client
        } else {
            Self::Server
        }
    }

    /// HTTP status code for this class.
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::Client => 400,
            Self::Server => 500,
        }
    }
}

/// Success or failure wrapper returned at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Envelope<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Payload on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// Message on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Wrap a successful result.
    pub const fn ok(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    /// Wrap a failure message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(message.into()),
        }
    }

    /// Wrap an analysis outcome, returning the error class on failure.
    pub fn from_result(result: Result<T, AnalysisError>) -> (Self, Option<ErrorClass>) {
        match result {
            Ok(value) => (Self::ok(value), None),
            Err(err) => (Self::failure(err.to_string()), Some(ErrorClass::of(&err))),
        }
    }
}
