// Copyright 2025 Bulkbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP error envelope.
//!
//! Harness errors map onto the standard envelope:
//! `INVALID_ARGUMENT` becomes 400, `STORE_ERROR` becomes 500. Nothing is
//! retried or downgraded on the way out.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bulkbench_core::HarnessError;
use chrono::Utc;
use serde_json::json;

/// Error response carrying a machine-readable kind and a message.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status for the response.
    pub status: StatusCode,
    /// Machine-readable error kind.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl ApiError {
    /// A 400 with the `INVALID_ARGUMENT` kind.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            code: "INVALID_ARGUMENT",
            message: message.into(),
        }
    }
}

impl From<HarnessError> for ApiError {
    fn from(err: HarnessError) -> Self {
        let status = match &err {
            HarnessError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            HarnessError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError {
            status,
            code: err.code(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "code": self.code,
                "message": self.message,
            },
            "meta": {
                "timestamp": Utc::now().to_rfc3339(),
            }
        }));
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_maps_to_400() {
        let err = ApiError::from(HarnessError::invalid("bad count"));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, "INVALID_ARGUMENT");
    }

    #[test]
    fn store_error_maps_to_500() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "gone");
        let err = ApiError::from(HarnessError::store("insert-bulk", 10, inner));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code, "STORE_ERROR");
        assert!(err.message.contains("insert-bulk"));
    }
}
