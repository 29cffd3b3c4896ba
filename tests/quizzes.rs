mod common;

use std::collections::HashSet;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{seeded_server, QUESTIONS};

fn quiz(category: Value, previous: &[i64]) -> Value {
    json!({
        "quiz_category": {"type": "click", "id": category},
        "previous_questions": previous,
    })
}

#[tokio::test]
async fn category_zero_draws_from_every_category() {
    let server = seeded_server().await;

    let mut seen_categories = HashSet::new();
    let mut previous = vec![];
    for _ in 0..QUESTIONS.len() {
        let response = server.post("/quizzes").json(&quiz(json!(0), &previous)).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], json!(true));
        let id = body["question"]["id"].as_i64().unwrap();
        assert!(!previous.contains(&id), "question {id} was asked twice");
        previous.push(id);
        seen_categories.insert(body["question"]["category"].as_i64().unwrap());
    }
    assert_eq!(seen_categories.len(), 6);

    let body: Value = server
        .post("/quizzes")
        .json(&quiz(json!(0), &previous))
        .await
        .json();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["question"], Value::Null);
}

#[tokio::test]
async fn stays_within_category_and_skips_previous() {
    let server = seeded_server().await;

    for _ in 0..10 {
        let body: Value = server
            .post("/quizzes")
            .json(&quiz(json!(1), &[2]))
            .await
            .json();
        let question = &body["question"];
        assert_eq!(question["category"], json!(1));
        assert!([3, 4].contains(&question["id"].as_i64().unwrap()));
    }

    let body: Value = server
        .post("/quizzes")
        .json(&quiz(json!(1), &[2, 3, 4]))
        .await
        .json();
    assert_eq!(body["question"], Value::Null);
}

#[tokio::test]
async fn accepts_string_category_ids() {
    let server = seeded_server().await;

    let body: Value = server
        .post("/quizzes")
        .json(&quiz(json!("6"), &[7]))
        .await
        .json();
    assert_eq!(body["question"]["id"], json!(8));
}

#[tokio::test]
async fn unknown_category_has_no_questions() {
    let server = seeded_server().await;

    let body: Value = server
        .post("/quizzes")
        .json(&quiz(json!(42), &[]))
        .await
        .json();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["question"], Value::Null);
}

#[tokio::test]
async fn malformed_requests_are_unprocessable() {
    let server = seeded_server().await;

    for body in [
        json!({}),
        json!({"previous_questions": []}),
        json!({"quiz_category": {"id": 1}}),
        json!({"quiz_category": {"id": "science"}, "previous_questions": []}),
    ] {
        let response = server.post("/quizzes").json(&body).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["error"], json!(422));
    }

    server
        .post("/quizzes")
        .text("garbage")
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
