use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use rand::{seq::SliceRandom, thread_rng};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{queries::questions::get_quiz_candidates, Question},
    server::{
        app::AppState,
        errors::{ApiError, ApiResult},
    },
    telemetry::QUIZ_QUESTIONS_CNTR,
};

/// Category id the client sends to play with every category.
const ALL_CATEGORIES: i64 = 0;

#[derive(Deserialize)]
struct QuizCategory {
    // category keys come back from the client as strings
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Deserialize)]
struct QuizRequest {
    quiz_category: QuizCategory,
    previous_questions: Vec<i64>,
}

#[derive(Serialize)]
struct QuizQuestion {
    success: bool,
    question: Option<Question>,
}

async fn next_question(
    State(pool): State<SqlitePool>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResult<QuizQuestion> {
    let Json(request) = body.map_err(|rejection| {
        tracing::warn!("Rejected quiz request: {rejection}");
        ApiError::Unprocessable
    })?;

    let category = match request.quiz_category.id {
        ALL_CATEGORIES => None,
        id => Some(id),
    };
    let candidates = get_quiz_candidates(&pool, category, &request.previous_questions)
        .await
        .map_err(ApiError::Unprocessable.from_db("load quiz candidates"))?;

    let question = candidates.choose(&mut thread_rng()).cloned();
    if question.is_some() {
        let label = category.map_or_else(|| "all".to_owned(), |id| id.to_string());
        QUIZ_QUESTIONS_CNTR.with_label_values(&[label.as_str()]).inc();
    } else {
        tracing::debug!(
            "No questions left after {} previous",
            request.previous_questions.len()
        );
    }

    Ok(Json(QuizQuestion {
        success: true,
        question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question))
        .with_state(state)
}
