//! Question endpoints: listing, creation, deletion and search

use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use fsnd_common::pagination::calculate_pagination;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::categories::category_map;
use super::{FlexibleId, PageQuery, QUESTIONS_PER_PAGE};
use crate::db::{categories, questions, NewQuestion, Question};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Either the single category every question belongs to, or all distinct ones
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CurrentCategory {
    Single(String),
    Many(Vec<String>),
}

impl CurrentCategory {
    pub fn from_labels(mut labels: Vec<String>) -> Self {
        if labels.len() == 1 {
            CurrentCategory::Single(labels.remove(0))
        } else {
            CurrentCategory::Many(labels)
        }
    }
}

/// Response for GET /questions
#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub categories: BTreeMap<String, String>,
    pub total_num_questions: i64,
    pub current_category: CurrentCategory,
}

/// Body of POST /questions
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<FlexibleId>,
    pub category: Option<FlexibleId>,
}

impl CreateQuestionRequest {
    /// Check that every field is present and well-typed
    pub fn validate(self) -> Result<NewQuestion, String> {
        let question = non_blank(self.question, "question")?;
        let answer = non_blank(self.answer, "answer")?;
        let difficulty = self
            .difficulty
            .as_ref()
            .and_then(FlexibleId::value)
            .ok_or("missing or invalid difficulty")?;
        let category = self
            .category
            .as_ref()
            .and_then(FlexibleId::value)
            .ok_or("missing or invalid category")?;

        Ok(NewQuestion {
            question,
            answer,
            difficulty,
            category,
        })
    }
}

fn non_blank(value: Option<String>, field: &str) -> Result<String, String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(format!("missing {}", field)),
    }
}

/// Response for POST /questions and DELETE /questions/:id
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
}

/// Body of POST /questions/search
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default, alias = "searchTerm")]
    pub query: String,
}

/// Response for POST /questions/search
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_num_questions: i64,
}

/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<QuestionsResponse>> {
    let total = questions::count_questions(&state.db).await?;
    if total == 0 {
        return Err(ApiError::NotFound("no questions".to_string()));
    }

    let pagination = calculate_pagination(query.page, QUESTIONS_PER_PAGE);
    let page = questions::list_questions_page(&state.db, pagination.page_size, pagination.offset).await?;
    let in_use = categories::categories_in_use(&state.db).await?;

    let labels = in_use.iter().map(|c| c.kind.clone()).collect();

    Ok(Json(QuestionsResponse {
        success: true,
        questions: page,
        categories: category_map(&in_use),
        total_num_questions: total,
        current_category: CurrentCategory::from_labels(labels),
    }))
}

/// DELETE /questions/:question_id
pub async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> ApiResult<Json<MutationResponse>> {
    let mut tx = state.db.begin().await?;

    match questions::delete_question(&mut *tx, question_id).await {
        Ok(true) => {
            tx.commit().await?;
            info!("Deleted question {}", question_id);
            Ok(Json(MutationResponse {
                success: true,
                message: format!("Question {} deleted", question_id),
                created: None,
            }))
        }
        Ok(false) => {
            tx.rollback().await?;
            Err(ApiError::NotFound(format!("question {}", question_id)))
        }
        Err(e) => {
            tx.rollback().await?;
            warn!("Delete of question {} rolled back: {}", question_id, e);
            Err(e.into())
        }
    }
}

/// POST /questions
///
/// Any missing or mistyped field, or a category that does not exist,
/// yields 422 and nothing is stored.
pub async fn create_question(
    State(state): State<AppState>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> ApiResult<Json<MutationResponse>> {
    let Json(request) = payload.map_err(|e| ApiError::Unprocessable(e.body_text()))?;
    let new = request.validate().map_err(ApiError::Unprocessable)?;

    let mut tx = state.db.begin().await?;

    match questions::insert_question(&mut *tx, &new).await {
        Ok(id) => {
            tx.commit().await?;
            info!("Created question {} in category {}", id, new.category);
            Ok(Json(MutationResponse {
                success: true,
                message: "question was successfully added".to_string(),
                created: Some(id),
            }))
        }
        Err(e) => {
            tx.rollback().await?;
            warn!("Insert of question rolled back: {}", e);
            if e.is_constraint_violation() {
                Err(ApiError::Unprocessable(e.to_string()))
            } else {
                Err(e.into())
            }
        }
    }
}

/// POST /questions/search?page=N
pub async fn search_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> ApiResult<Json<SearchResponse>> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let matches = questions::search_questions(&state.db, &request.query).await?;
    if matches.is_empty() {
        return Err(ApiError::NotFound(format!("no question matches {:?}", request.query)));
    }

    let total = matches.len() as i64;
    let page = calculate_pagination(query.page, QUESTIONS_PER_PAGE).slice(matches);

    Ok(Json(SearchResponse {
        success: true,
        questions: page,
        total_num_questions: total,
    }))
}
