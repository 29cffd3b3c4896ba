use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Errors surfaced to API clients. Each endpoint collapses whatever went wrong into
/// one of these, so the cause is only visible in the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    BadRequest,
    NotFound,
    Unprocessable,
    Internal,
    MethodNotAllowed,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest => "Bad request",
            ApiError::NotFound => "Page not found",
            ApiError::Unprocessable => "Unprocessable resource",
            ApiError::Internal => "Internal server error",
            ApiError::MethodNotAllowed => "Invalid method!",
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            success: false,
            error: self.status_code().as_u16(),
            message: self.message(),
        }
    }

    /// Logs a database failure and turns it into `self`.
    pub fn from_db(self, context: &str) -> impl FnOnce(sqlx::Error) -> ApiError + '_ {
        move |error| {
            tracing::error!("Failed to {context}: {error}");
            self
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}

pub async fn not_found() -> ApiError {
    tracing::info!("Fallback");
    ApiError::NotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
