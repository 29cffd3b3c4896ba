#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use trivia_api::db::queries::{categories::create_category, questions::create_question};
use trivia_api::db::{run_migrations, NewQuestion};
use trivia_api::server::app::{build_router, AppState};

pub const CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

// (question, answer, category, difficulty)
pub const QUESTIONS: [(&str, &str, i64, i64); 12] = [
    ("What is the Capital of France?", "Paris", 3, 1),
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("Which Dutch graphic artist created impossible objects?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("Which is the only team to play in every soccer World Cup?", "Brazil", 6, 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
];

pub async fn test_pool() -> SqlitePool {
    // a single connection that never recycles, every connection to :memory: is a new database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Cannot open in-memory database");
    run_migrations(&pool).await.expect("Migrations failed");
    pool
}

pub async fn seed(pool: &SqlitePool) {
    for kind in CATEGORIES {
        create_category(pool, kind).await.unwrap();
    }
    for (question, answer, category, difficulty) in QUESTIONS {
        create_question(
            pool,
            &NewQuestion {
                question: Some(question.to_owned()),
                answer: Some(answer.to_owned()),
                category: Some(category),
                difficulty: Some(difficulty),
            },
        )
        .await
        .unwrap();
    }
}

pub fn test_server(pool: SqlitePool) -> TestServer {
    TestServer::new(build_router(AppState::new(pool))).expect("Cannot start test server")
}

pub async fn seeded_server() -> TestServer {
    let pool = test_pool().await;
    seed(&pool).await;
    test_server(pool)
}
