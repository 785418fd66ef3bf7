//! Error types and HTTP response handling.
//!
//! The `AppError` enum is the top-level error type. It wraps the
//! concern-specific errors (configuration, store) and implements
//! `IntoResponse` so handlers can fail with `?` and still produce a proper
//! JSON error body.

pub mod config;


use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{data::store::StoreError, error::config::ConfigError},
};

/// Top-level application error type.
///
/// Business-rule violations surface as `BadRequest`/`NotFound` with the
/// message passed through to the client; infrastructure failures are logged
/// server-side and answered with a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while reading the environment at startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Collection store failure. Version conflicts map to 409 Conflict,
    /// everything else to 500 Internal Server Error.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// I/O error outside the store, e.g. binding the listen socket.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found. Results in 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. Results in 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For store version conflicts
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::StoreErr(err @ StoreError::VersionConflict { .. }) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// The full error is logged for debugging; the client receives a generic
/// message so internal details never leak into responses.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
