use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::{find_category, get_category_types},
            questions::get_questions_for_category,
        },
        Question,
    },
    server::{
        app::AppState,
        deserializers::PageQuery,
        errors::{ApiError, ApiResult},
        pagination::{paginate, QUESTIONS_PER_PAGE},
    },
};

use super::{path_id, requested_page};

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, Option<String>>,
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<String>,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResult<CategoriesResponse> {
    let categories = get_category_types(&pool)
        .await
        .map_err(ApiError::NotFound.from_db("load categories"))?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

async fn questions_for_category(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<CategoryQuestionsResponse> {
    let category_id = path_id(path)?;
    let category = find_category(&pool, category_id)
        .await
        .map_err(ApiError::NotFound.from_db("load category"))?
        .ok_or(ApiError::NotFound)?;

    let selection = get_questions_for_category(&pool, category_id)
        .await
        .map_err(ApiError::NotFound.from_db("load questions for category"))?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: paginate(&selection, requested_page(query), QUESTIONS_PER_PAGE).to_vec(),
        total_questions: selection.len(),
        current_category: category.kind,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route(
            "/categories/{category_id}/questions",
            get(questions_for_category),
        )
        .with_state(state)
}
