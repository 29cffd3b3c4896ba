use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: Option<String>,
}

pub async fn get_all_categories(pool: &SqlitePool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
SELECT id, type
FROM categories
ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Category id to type label, keyed in id order.
pub async fn get_category_types(pool: &SqlitePool) -> sqlx::Result<BTreeMap<i64, Option<String>>> {
    Ok(get_all_categories(pool)
        .await?
        .into_iter()
        .map(|c| (c.id, c.kind))
        .collect())
}

pub async fn find_category(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, type FROM categories WHERE categories.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_category(pool: &SqlitePool, kind: &str) -> sqlx::Result<i64> {
    let mut conn = pool.acquire().await?;

    let id = sqlx::query(
        r#"
INSERT INTO categories (type) VALUES (?1)
        "#,
    )
    .bind(kind)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    Ok(id)
}
