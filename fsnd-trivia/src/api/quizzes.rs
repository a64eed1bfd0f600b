//! Quiz endpoint: one random unseen question per call

use std::collections::HashSet;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::FlexibleId;
use crate::db::{questions, Question};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Category id meaning "no category filter"
pub const ANY_CATEGORY: i64 = 0;

/// Category used when the request names none
const DEFAULT_QUIZ_CATEGORY: i64 = 1;

/// `quiz_category` object sent by the client
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: FlexibleId,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Body of POST /quizzes
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
    #[serde(default)]
    pub previous_questions: Vec<i64>,
}

/// Response for POST /quizzes
///
/// `question` is omitted once every eligible question has been seen.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
    pub previous_questions: Vec<i64>,
}

/// Pick one question uniformly at random among those not in `previous`
pub fn choose_question<'a, R: Rng + ?Sized>(
    candidates: &'a [Question],
    previous: &[i64],
    rng: &mut R,
) -> Option<&'a Question> {
    let seen: HashSet<i64> = previous.iter().copied().collect();
    let eligible: Vec<&Question> = candidates.iter().filter(|q| !seen.contains(&q.id)).collect();

    eligible.choose(rng).copied()
}

/// POST /quizzes
pub async fn play_quiz(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResult<Json<QuizResponse>> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let category_id = match &request.quiz_category {
        Some(category) => category
            .id
            .value()
            .ok_or_else(|| ApiError::BadRequest("quiz_category.id is not a number".to_string()))?,
        None => DEFAULT_QUIZ_CATEGORY,
    };

    let filter = (category_id != ANY_CATEGORY).then_some(category_id);
    let candidates = questions::quiz_candidates(&state.db, filter).await?;

    let mut previous_questions = request.previous_questions;
    let question = choose_question(&candidates, &previous_questions, &mut rand::thread_rng()).cloned();

    match &question {
        Some(q) => {
            previous_questions.push(q.id);
            debug!(category_id, question_id = q.id, "Quiz question chosen");
        }
        None => debug!(category_id, "Quiz exhausted"),
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
        previous_questions,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: i64, category: i64) -> Question {
        Question {
            id,
            question: format!("Question {}", id),
            answer: "answer".to_string(),
            category,
            difficulty: 1,
        }
    }

    #[test]
    fn test_never_returns_previous_question() {
        let candidates: Vec<Question> = (1..=5).map(|id| question(id, 1)).collect();
        let previous = [1, 2, 4, 5];
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let chosen = choose_question(&candidates, &previous, &mut rng).unwrap();
            assert_eq!(chosen.id, 3);
        }
    }

    #[test]
    fn test_exhausted_returns_none() {
        let candidates = vec![question(1, 1), question(2, 1)];
        let mut rng = StdRng::seed_from_u64(1);

        assert!(choose_question(&candidates, &[1, 2], &mut rng).is_none());
        assert!(choose_question(&[], &[], &mut rng).is_none());
    }

    #[test]
    fn test_every_eligible_question_reachable() {
        let candidates: Vec<Question> = (1..=3).map(|id| question(id, 2)).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();

        for _ in 0..200 {
            seen.insert(choose_question(&candidates, &[], &mut rng).unwrap().id);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_quiz_request_defaults() {
        let request: QuizRequest = serde_json::from_str("{}").unwrap();
        assert!(request.quiz_category.is_none());
        assert!(request.previous_questions.is_empty());

        let request: QuizRequest =
            serde_json::from_str(r#"{"quiz_category": {"type": "click", "id": 0}, "previous_questions": [3]}"#)
                .unwrap();
        assert_eq!(request.quiz_category.unwrap().id.value(), Some(ANY_CATEGORY));
        assert_eq!(request.previous_questions, vec![3]);
    }
}
