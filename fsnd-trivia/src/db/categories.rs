//! Category queries

use fsnd_common::Result;
use serde::Serialize;
use sqlx::{Row, SqlitePool};

/// Category record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Self {
        Self {
            id: row.get("id"),
            kind: row.get("type"),
        }
    }
}

/// All categories ordered by id
pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<Category>> {
    let rows = sqlx::query("SELECT id, type FROM categories ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(Category::from_row).collect())
}

/// Load category by id
pub async fn load_category(pool: &SqlitePool, id: i64) -> Result<Option<Category>> {
    let row = sqlx::query("SELECT id, type FROM categories WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(Category::from_row))
}

/// Distinct categories that at least one question belongs to
pub async fn categories_in_use(pool: &SqlitePool) -> Result<Vec<Category>> {
    let rows = sqlx::query(
        r#"
        SELECT DISTINCT c.id, c.type
        FROM categories c
        JOIN questions q ON q.category = c.id
        ORDER BY c.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(Category::from_row).collect())
}

/// Insert a category, returning its id
pub async fn insert_category(pool: &SqlitePool, kind: &str) -> Result<i64> {
    let result = sqlx::query("INSERT INTO categories (type) VALUES (?)")
        .bind(kind)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}
