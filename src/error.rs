// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::types::ErrorResponse;

/// Failure of a single evidence provider. Always absorbed by the aggregator.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("provider has no credential configured")]
    NotConfigured,
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else if err.is_decode() {
            ProviderError::InvalidResponse(err.to_string())
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

/// Failure talking to the text-generation backend. Always absorbed by the arbiter.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model request timed out")]
    Timeout,
    #[error("model backend unreachable: {0}")]
    Connection(String),
    #[error("model backend returned status {0}")]
    Status(u16),
    #[error("malformed model output: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ModelError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ModelError::Timeout
        } else if err.is_decode() {
            ModelError::Malformed(err.to_string())
        } else {
            ModelError::Connection(err.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// The only error type that reaches callers of the pipeline.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("{0}")]
    Validation(String),
    #[error("Internal Verification Error")]
    Internal,
}

impl IntoResponse for VerifyError {
    fn into_response(self) -> Response {
        let status = match self {
            VerifyError::Validation(_) => StatusCode::BAD_REQUEST,
            VerifyError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
