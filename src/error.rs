use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{response::ErrorResponse, validation::ValidationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Invalid {0} id")]
    InvalidIdentifier(&'static str),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Database not configured")]
    StorageUnavailable,

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Rejected { status, .. } => *status,
            AppError::StorageUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::OrmError(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        let body = match self {
            AppError::Validation(err) => ErrorResponse::fields(err.errors),
            AppError::OrmError(ref err) => {
                tracing::error!(error = %err, "database error");
                ErrorResponse::message("Internal Server Error")
            }
            AppError::Internal(ref err) => {
                tracing::error!(error = %err, "internal error");
                ErrorResponse::message("Internal Server Error")
            }
            AppError::StorageUnavailable => {
                tracing::warn!("request needs storage but none is configured");
                ErrorResponse::message(message)
            }
            _ => ErrorResponse::message(message),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
