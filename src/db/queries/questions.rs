use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct NewQuestion {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    // the web client posts select values, so numbers may arrive as strings
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub difficulty: Option<i64>,
}

pub async fn get_all_questions(pool: &SqlitePool) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn find_question(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions WHERE questions.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_questions_for_category(
    pool: &SqlitePool,
    category: i64,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions
        WHERE questions.category = ?1
        ORDER BY id
        "#,
    )
    .bind(category)
    .fetch_all(pool)
    .await
}

/// Questions whose text contains `term`, ignoring case. SQLite's `LOWER` and `LIKE` only
/// fold ASCII, so matching happens here with Unicode lowercasing.
pub async fn search_questions(pool: &SqlitePool, term: &str) -> sqlx::Result<Vec<Question>> {
    let term = term.to_lowercase();
    Ok(get_all_questions(pool)
        .await?
        .into_iter()
        .filter(|q| {
            q.question
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(&term))
        })
        .collect())
}

/// Questions eligible for a quiz round. `category` of `None` means every category.
pub async fn get_quiz_candidates(
    pool: &SqlitePool,
    category: Option<i64>,
    excluded: &[i64],
) -> sqlx::Result<Vec<Question>> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE 1 = 1",
    );
    if let Some(category) = category {
        builder.push(" AND category = ").push_bind(category);
    }
    if !excluded.is_empty() {
        builder.push(" AND id NOT IN (");
        let mut ids = builder.separated(", ");
        for id in excluded {
            ids.push_bind(*id);
        }
        ids.push_unseparated(")");
    }
    builder.push(" ORDER BY id");

    builder.build_query_as::<Question>().fetch_all(pool).await
}

pub async fn create_question(pool: &SqlitePool, new_question: &NewQuestion) -> sqlx::Result<i64> {
    let mut conn = pool.acquire().await?;

    let id = sqlx::query(
        r#"
INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(new_question.question.as_deref())
    .bind(new_question.answer.as_deref())
    .bind(new_question.category)
    .bind(new_question.difficulty)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// Returns `false` when no row had that id.
pub async fn delete_question(pool: &SqlitePool, id: i64) -> sqlx::Result<bool> {
    let mut conn = pool.acquire().await?;

    let deleted = sqlx::query(
        r#"
        DELETE FROM questions WHERE questions.id = ?1
        "#,
    )
    .bind(id)
    .execute(&mut *conn)
    .await?
    .rows_affected();
    Ok(deleted > 0)
}
