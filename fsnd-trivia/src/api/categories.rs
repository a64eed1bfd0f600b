//! Category endpoints

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use fsnd_common::pagination::calculate_pagination;
use serde::Serialize;

use super::{PageQuery, QUESTIONS_PER_PAGE};
use crate::db::{categories, questions, Category, Question};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Response for GET /categories
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    /// Stringified id → category label
    pub categories: BTreeMap<String, String>,
}

/// Response for GET /categories/:id/questions
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_num_questions: i64,
    /// Category label, under the key older clients read
    pub category: String,
    /// Same label, under the key the question list uses
    pub current_category: String,
}

/// Key categories by stringified id
pub fn category_map(categories: &[Category]) -> BTreeMap<String, String> {
    categories
        .iter()
        .map(|c| (c.id.to_string(), c.kind.clone()))
        .collect()
}

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<CategoriesResponse>> {
    let all = categories::list_categories(&state.db).await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(&all),
    }))
}

/// GET /categories/:category_id/questions?page=N
pub async fn questions_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<CategoryQuestionsResponse>> {
    let category = categories::load_category(&state.db, category_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("category {}", category_id)))?;

    let total = questions::count_in_category(&state.db, category_id).await?;
    let pagination = calculate_pagination(query.page, QUESTIONS_PER_PAGE);
    let page = questions::list_in_category_page(
        &state.db,
        category_id,
        pagination.page_size,
        pagination.offset,
    )
    .await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: page,
        total_num_questions: total,
        category: category.kind.clone(),
        current_category: category.kind,
    }))
}
