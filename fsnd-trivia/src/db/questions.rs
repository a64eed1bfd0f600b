//! Question queries
//!
//! Listing queries join `categories` so a question whose category row is
//! gone never shows up in results.

use fsnd_common::db::SearchTerm;
use fsnd_common::Result;
use serde::Serialize;
use sqlx::{Row, SqliteConnection, SqlitePool};

/// Question record as exposed by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl Question {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Self {
        Self {
            id: row.get("id"),
            question: row.get("question"),
            answer: row.get("answer"),
            category: row.get("category"),
            difficulty: row.get("difficulty"),
        }
    }
}

/// Validated input for a new question
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: i64,
}

const SELECT_JOINED: &str = r#"
    SELECT q.id, q.question, q.answer, q.category, q.difficulty
    FROM questions q
    JOIN categories c ON c.id = q.category
"#;

/// Total number of questions (with an existing category)
pub async fn count_questions(pool: &SqlitePool) -> Result<i64> {
    let total = sqlx::query_scalar(
        "SELECT COUNT(*) FROM questions q JOIN categories c ON c.id = q.category",
    )
    .fetch_one(pool)
    .await?;

    Ok(total)
}

/// One page of questions ordered by id
pub async fn list_questions_page(pool: &SqlitePool, limit: i64, offset: i64) -> Result<Vec<Question>> {
    let rows = sqlx::query(&format!("{} ORDER BY q.id LIMIT ? OFFSET ?", SELECT_JOINED))
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(Question::from_row).collect())
}

/// Questions whose text contains `term`, ignoring case, ordered by id
pub async fn search_questions(pool: &SqlitePool, term: &str) -> Result<Vec<Question>> {
    let term = SearchTerm::new(term);
    let rows = sqlx::query(&format!("{} ORDER BY q.id", SELECT_JOINED))
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .map(Question::from_row)
        .filter(|q| term.matches(&q.question))
        .collect())
}

/// Number of questions in a category
pub async fn count_in_category(pool: &SqlitePool, category_id: i64) -> Result<i64> {
    let total = sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE category = ?")
        .bind(category_id)
        .fetch_one(pool)
        .await?;

    Ok(total)
}

/// One page of the questions in a category
pub async fn list_in_category_page(
    pool: &SqlitePool,
    category_id: i64,
    limit: i64,
    offset: i64,
) -> Result<Vec<Question>> {
    let rows = sqlx::query(&format!(
        "{} WHERE q.category = ? ORDER BY q.id LIMIT ? OFFSET ?",
        SELECT_JOINED
    ))
    .bind(category_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(Question::from_row).collect())
}

/// Quiz candidates: every question, or only those of `category_id` when given
pub async fn quiz_candidates(pool: &SqlitePool, category_id: Option<i64>) -> Result<Vec<Question>> {
    let rows = sqlx::query(&format!(
        "{} WHERE (?1 IS NULL OR q.category = ?1) ORDER BY q.id",
        SELECT_JOINED
    ))
    .bind(category_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(Question::from_row).collect())
}

/// Load question by id
pub async fn load_question(pool: &SqlitePool, id: i64) -> Result<Option<Question>> {
    let row = sqlx::query("SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(Question::from_row))
}

/// Insert a question, returning its id
///
/// Runs on the caller's connection so it can take part in a transaction.
pub async fn insert_question(conn: &mut SqliteConnection, new: &NewQuestion) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO questions (question, answer, difficulty, category) VALUES (?, ?, ?, ?)",
    )
    .bind(&new.question)
    .bind(&new.answer)
    .bind(new.difficulty)
    .bind(new.category)
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Delete a question, returning whether a row was removed
pub async fn delete_question(conn: &mut SqliteConnection, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected() > 0)
}
