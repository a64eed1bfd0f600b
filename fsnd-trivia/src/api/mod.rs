//! HTTP API handlers for fsnd-trivia

pub mod categories;
pub mod errors;
pub mod health;
pub mod questions;
pub mod quizzes;

pub use categories::{list_categories, questions_by_category};
pub use errors::{envelope_plain_errors, not_found};
pub use health::health_routes;
pub use questions::{create_question, delete_question, list_questions, search_questions};
pub use quizzes::play_quiz;

use serde::Deserialize;

/// Questions per page for every paginated listing
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// `?page=N` query parameter (1-indexed)
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

/// Numeric id that clients send either as a JSON number or a numeric string
///
/// The trivia front end posts `<select>` values, which arrive as strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FlexibleId {
    Number(i64),
    Text(String),
}

impl FlexibleId {
    /// Integer value, `None` when the text is not a number
    pub fn value(&self) -> Option<i64> {
        match self {
            FlexibleId::Number(n) => Some(*n),
            FlexibleId::Text(s) => s.trim().parse().ok(),
        }
    }
}
