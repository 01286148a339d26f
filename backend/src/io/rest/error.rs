use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::MessageResponse;
use tracing::error;

use crate::domain::DomainError;

/// Error returned by REST handlers, rendered as a JSON `{message}` body
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    Unauthorized(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Domain(DomainError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Domain(DomainError::Storage(e)) => {
                error!("Storage failure: {:?}", e);
                "internal server error".to_string()
            }
            ApiError::Domain(e) => e.to_string(),
            ApiError::Unauthorized(message) => message,
        };
        (status, Json(MessageResponse::new(message))).into_response()
    }
}
