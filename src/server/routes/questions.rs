use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_category_types, questions},
        NewQuestion, Question,
    },
    server::{
        app::AppState,
        deserializers::PageQuery,
        errors::{ApiError, ApiResult},
        pagination::{paginate, QUESTIONS_PER_PAGE},
    },
    telemetry::{QUESTIONS_CREATED_CNTR, QUESTIONS_DELETED_CNTR},
};

use super::{body_rejection, path_id, requested_page};

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: String,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, Option<String>>,
    current_category: Option<String>,
}

#[derive(Serialize)]
struct DeletedQuestion {
    success: bool,
    deleted: i64,
    // the web client reads the refreshed page from `question`
    question: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct CreatedQuestion {
    success: bool,
    created: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
}

async fn questions_page(
    State(pool): State<SqlitePool>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<QuestionsPage> {
    let selection = questions::get_all_questions(&pool)
        .await
        .map_err(ApiError::NotFound.from_db("load questions"))?;
    let current = paginate(&selection, requested_page(query), QUESTIONS_PER_PAGE);
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = get_category_types(&pool)
        .await
        .map_err(ApiError::NotFound.from_db("load categories"))?;

    Ok(Json(QuestionsPage {
        success: true,
        questions: current.to_vec(),
        total_questions: selection.len(),
        categories,
        current_category: None,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<DeletedQuestion> {
    let question_id = path_id(path)?;
    questions::find_question(&pool, question_id)
        .await
        .map_err(ApiError::Unprocessable.from_db("look up question"))?
        .ok_or(ApiError::NotFound)?;

    if !questions::delete_question(&pool, question_id)
        .await
        .map_err(ApiError::Unprocessable.from_db("delete question"))?
    {
        // removed by a concurrent request between lookup and delete
        return Err(ApiError::NotFound);
    }
    QUESTIONS_DELETED_CNTR.inc();
    tracing::info!("Deleted question {question_id}");

    let selection = questions::get_all_questions(&pool)
        .await
        .map_err(ApiError::Unprocessable.from_db("reload questions"))?;

    Ok(Json(DeletedQuestion {
        success: true,
        deleted: question_id,
        question: paginate(&selection, requested_page(query), QUESTIONS_PER_PAGE).to_vec(),
        total_questions: selection.len(),
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    query: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<NewQuestion>, JsonRejection>,
) -> ApiResult<CreatedQuestion> {
    let Json(new_question) = body.map_err(body_rejection)?;

    let id = questions::create_question(&pool, &new_question)
        .await
        .map_err(ApiError::Unprocessable.from_db("insert question"))?;
    QUESTIONS_CREATED_CNTR.inc();
    tracing::info!("Created question {id}");

    let selection = questions::get_all_questions(&pool)
        .await
        .map_err(ApiError::Unprocessable.from_db("reload questions"))?;

    Ok(Json(CreatedQuestion {
        success: true,
        created: id,
        questions: paginate(&selection, requested_page(query), QUESTIONS_PER_PAGE).to_vec(),
        total_questions: selection.len(),
    }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    query: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> ApiResult<SearchResults> {
    let Json(SearchBody { search_term }) = body.map_err(body_rejection)?;

    let matches = questions::search_questions(&pool, &search_term)
        .await
        .map_err(ApiError::Unprocessable.from_db("search questions"))?;
    tracing::debug!("Search {search_term:?} matched {} questions", matches.len());

    Ok(Json(SearchResults {
        success: true,
        questions: paginate(&matches, requested_page(query), QUESTIONS_PER_PAGE).to_vec(),
        total_questions: matches.len(),
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(questions_page).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{question_id}", delete(delete_question))
        .with_state(state)
}
