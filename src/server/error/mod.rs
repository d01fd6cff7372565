//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum is the top-level error
//! type that wraps lower-level errors and implements `IntoResponse` for the handlers.
//!
//! Missing or malformed race data is never an error: summaries degrade to null or
//! empty fields instead. Only an unknown race id produces a client error.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For every other variant
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { detail: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { detail: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Responds 500 for any displayable error.
///
/// The error itself is only written to the log; clients get `"Internal server error"`.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                detail: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
