// HTTP-facing error type
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::database::DatabaseError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Render(#[from] tera::Error),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internals but never expose SQL or template details to clients
        let body = match &self {
            AppError::NotFound(message) => message.clone(),
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                "An error occurred while processing your request".to_string()
            }
            AppError::Render(e) => {
                tracing::error!("Template rendering error: {}", e);
                "An error occurred while rendering the page".to_string()
            }
        };

        (status, body).into_response()
    }
}
