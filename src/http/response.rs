//! Response envelopes.
//!
//! # Responsibilities
//! - Serialize successful results as `{"result": number}`
//! - Map every `CalcError` to `400 {"error": message}`
//!
//! # Design Decisions
//! - Non-finite results serialize as `null` (serde_json behavior)
//! - Errors never reach the client as plain text

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::calc::CalcError;

/// Success envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalcResult {
    pub result: f64,
}

/// Failure envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl IntoResponse for CalcResult {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

impl IntoResponse for CalcError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
