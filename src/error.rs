use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use thiserror::Error;

const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Failed to render page: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Session { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Render { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Detail stays in the log, the client gets a generic message
        error!("Request failed: {}", self);

        (status, GENERIC_FAILURE).into_response()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}
