mod categories;
mod questions;
mod quizzes;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query};

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use super::deserializers::{first_page, PageQuery};
use super::errors::ApiError;

pub(crate) fn requested_page(query: Result<Query<PageQuery>, QueryRejection>) -> i64 {
    match query {
        Ok(Query(PageQuery { page })) => page,
        Err(rejection) => {
            tracing::debug!("Ignoring page query: {rejection}");
            first_page()
        }
    }
}

// routes are declared with integer ids, anything else is a route that doesn't exist
pub(crate) fn path_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!("Bad path id: {rejection}");
        ApiError::NotFound
    })
}

/// Malformed JSON is a bad request, well-formed JSON of the wrong shape is unprocessable.
pub(crate) fn body_rejection(rejection: JsonRejection) -> ApiError {
    tracing::warn!("Rejected request body: {rejection}");
    match rejection {
        JsonRejection::JsonDataError(_) => ApiError::Unprocessable,
        _ => ApiError::BadRequest,
    }
}
