//! Integration tests for fsnd-trivia API endpoints
//!
//! Tests cover:
//! - Category listing keyed by stringified id
//! - Paginated question listing with current_category
//! - Question creation, validation failures and rollback
//! - Question deletion and not-found handling
//! - Search and per-category listing
//! - Quiz selection excluding previously seen questions
//! - JSON error envelopes for 400/404/405/422

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
};
use fsnd_trivia::db::{self, categories, questions, NewQuestion};
use fsnd_trivia::{build_router, AppState};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: fresh database file with schema, no rows
async fn setup_empty_db() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let pool = fsnd_common::db::connect_database(&dir.path().join("trivia.db"))
        .await
        .expect("Should open test database");
    db::create_schema(&pool).await.expect("Should create schema");
    (pool, dir)
}

/// Test helper: database with three categories and twelve questions
///
/// Science (1): 3 questions, Art (2): 2 questions, Geography (3): 7 questions.
/// Two question texts contain "title".
async fn setup_test_db() -> (SqlitePool, TempDir) {
    let (pool, dir) = setup_empty_db().await;

    for label in ["Science", "Art", "Geography"] {
        categories::insert_category(&pool, label).await.unwrap();
    }

    let mut seed = vec![
        ("What is the chemical symbol for gold?", "Au", 1, 1),
        ("What is the boiling point of water in Celsius?", "100", 1, 1),
        ("Which planet has the most moons?", "Saturn", 3, 1),
        ("Who painted the Mona Lisa? (give the title holder)", "Da Vinci", 2, 2),
        ("Which artist has the title 'The Starry Night'?", "Van Gogh", 2, 2),
    ];
    let geography = [
        "Capital of France?",
        "Longest river?",
        "Largest desert?",
        "Highest mountain?",
        "Smallest country?",
        "Largest ocean?",
        "Capital of Japan?",
    ];
    for q in geography {
        seed.push((q, "answer", 2, 3));
    }

    for (question, answer, difficulty, category) in seed {
        let mut conn = pool.acquire().await.unwrap();
        questions::insert_question(
            &mut conn,
            &NewQuestion {
                question: question.to_string(),
                answer: answer.to_string(),
                difficulty,
                category,
            },
        )
        .await
        .unwrap();
    }

    (pool, dir)
}

/// Test helper: create app with test state
fn setup_app(db: SqlitePool) -> axum::Router {
    build_router(AppState::new(db))
}

fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

fn assert_envelope(body: &Value, code: u16, message: &str) {
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], code);
    assert_eq!(body["message"], message);
}

// =============================================================================
// Health & routing
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (db, _dir) = setup_empty_db().await;
    let response = setup_app(db).oneshot(test_request("GET", "/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "fsnd-trivia");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (db, _dir) = setup_empty_db().await;
    let response = setup_app(db).oneshot(test_request("GET", "/nope")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_envelope(&extract_json(response).await, 404, "Not Found");
}

#[tokio::test]
async fn test_wrong_method_is_json_405() {
    let (db, _dir) = setup_test_db().await;
    let app = setup_app(db);

    for (method, uri) in [("POST", "/categories"), ("PUT", "/questions"), ("GET", "/quizzes")] {
        let response = app.clone().oneshot(test_request(method, uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{} {}", method, uri);
        assert_envelope(&extract_json(response).await, 405, "Method Not Allowed");
    }
}

#[tokio::test]
async fn test_non_numeric_id_is_json_400() {
    let (db, _dir) = setup_test_db().await;
    let response = setup_app(db)
        .oneshot(test_request("DELETE", "/questions/abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_envelope(&extract_json(response).await, 400, "Bad Request");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (db, _dir) = setup_test_db().await;
    let request = Request::builder()
        .method("GET")
        .uri("/categories")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = setup_app(db).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

// =============================================================================
// Categories
// =============================================================================

#[tokio::test]
async fn test_get_categories() {
    let (db, _dir) = setup_test_db().await;
    let response = setup_app(db).oneshot(test_request("GET", "/categories")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["categories"],
        json!({"1": "Science", "2": "Art", "3": "Geography"})
    );
}

#[tokio::test]
async fn test_get_categories_empty_table() {
    let (db, _dir) = setup_empty_db().await;
    let response = setup_app(db).oneshot(test_request("GET", "/categories")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["categories"], json!({}));
}

#[tokio::test]
async fn test_get_questions_per_category() {
    let (db, _dir) = setup_test_db().await;
    let response = setup_app(db)
        .oneshot(test_request("GET", "/categories/1/questions"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["total_num_questions"], 3);
    assert_eq!(body["category"], "Science");
    assert_eq!(body["current_category"], "Science");
    assert_eq!(body["questions"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_questions_for_missing_category() {
    let (db, _dir) = setup_test_db().await;
    let response = setup_app(db)
        .oneshot(test_request("GET", "/categories/7/questions"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_envelope(&extract_json(response).await, 404, "Not Found");
}

// =============================================================================
// Question listing
// =============================================================================

#[tokio::test]
async fn test_get_questions_first_page() {
    let (db, _dir) = setup_test_db().await;
    let response = setup_app(db).oneshot(test_request("GET", "/questions")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["total_num_questions"], 12);
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);
    assert_eq!(
        body["categories"],
        json!({"1": "Science", "2": "Art", "3": "Geography"})
    );
    assert_eq!(body["current_category"], json!(["Science", "Art", "Geography"]));
}

#[tokio::test]
async fn test_get_questions_second_and_past_last_page() {
    let (db, _dir) = setup_test_db().await;
    let app = setup_app(db);

    let body = extract_json(app.clone().oneshot(test_request("GET", "/questions?page=2")).await.unwrap()).await;
    assert_eq!(body["questions"].as_array().unwrap().len(), 2);

    let body = extract_json(app.oneshot(test_request("GET", "/questions?page=9")).await.unwrap()).await;
    assert_eq!(body["success"], true);
    assert!(body["questions"].as_array().unwrap().is_empty());
    assert_eq!(body["total_num_questions"], 12);
}

#[tokio::test]
async fn test_get_questions_huge_page_is_empty() {
    let (db, _dir) = setup_test_db().await;
    let response = setup_app(db)
        .oneshot(test_request("GET", "/questions?page=9223372036854775807"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert!(body["questions"].as_array().unwrap().is_empty());
    assert_eq!(body["total_num_questions"], 12);
}

#[tokio::test]
async fn test_get_questions_single_category_is_string() {
    let (db, _dir) = setup_empty_db().await;
    let id = categories::insert_category(&db, "Sports").await.unwrap();
    let mut conn = db.acquire().await.unwrap();
    questions::insert_question(
        &mut conn,
        &NewQuestion {
            question: "Which country won the 1966 World Cup?".to_string(),
            answer: "England".to_string(),
            difficulty: 3,
            category: id,
        },
    )
    .await
    .unwrap();
    drop(conn);

    let body = extract_json(setup_app(db).oneshot(test_request("GET", "/questions")).await.unwrap()).await;
    assert_eq!(body["current_category"], "Sports");
}

#[tokio::test]
async fn test_get_questions_when_none_exist() {
    let (db, _dir) = setup_empty_db().await;
    let response = setup_app(db).oneshot(test_request("GET", "/questions")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_envelope(&extract_json(response).await, 404, "Not Found");
}

// =============================================================================
// Deletion
// =============================================================================

#[tokio::test]
async fn test_delete_question() {
    let (db, _dir) = setup_test_db().await;
    let response = setup_app(db.clone())
        .oneshot(test_request("DELETE", "/questions/2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Question 2 deleted");
    assert!(questions::load_question(&db, 2).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_question() {
    let (db, _dir) = setup_test_db().await;
    let response = setup_app(db.clone())
        .oneshot(test_request("DELETE", "/questions/1000"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_envelope(&extract_json(response).await, 404, "Not Found");
    assert_eq!(questions::count_questions(&db).await.unwrap(), 12);
}

// =============================================================================
// Creation
// =============================================================================

#[tokio::test]
async fn test_create_question() {
    let (db, _dir) = setup_test_db().await;
    let payload = json!({
        "question": "how are you",
        "answer": "good",
        "difficulty": 3,
        "category": 2,
    });
    let response = setup_app(db.clone())
        .oneshot(json_request("POST", "/questions", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "question was successfully added");

    let id = body["created"].as_i64().unwrap();
    let stored = questions::load_question(&db, id).await.unwrap().unwrap();
    assert_eq!(stored.question, "how are you");
    assert_eq!(stored.answer, "good");
    assert_eq!(stored.difficulty, 3);
    assert_eq!(stored.category, 2);
}

#[tokio::test]
async fn test_create_question_missing_category() {
    let (db, _dir) = setup_test_db().await;
    let payload = json!({
        "question": "not eligible question",
        "answer": "good",
        "difficulty": 3,
    });
    let response = setup_app(db.clone())
        .oneshot(json_request("POST", "/questions", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_envelope(&extract_json(response).await, 422, "Unprocessable");
    assert!(questions::search_questions(&db, "not eligible question").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_question_unknown_category_rolls_back() {
    let (db, _dir) = setup_test_db().await;
    let payload = json!({
        "question": "orphan question",
        "answer": "none",
        "difficulty": 1,
        "category": 99,
    });
    let response = setup_app(db.clone())
        .oneshot(json_request("POST", "/questions", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(questions::search_questions(&db, "orphan question").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_question_malformed_json() {
    let (db, _dir) = setup_test_db().await;
    let request = Request::builder()
        .method("POST")
        .uri("/questions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = setup_app(db).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_envelope(&extract_json(response).await, 422, "Unprocessable");
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_questions() {
    let (db, _dir) = setup_test_db().await;
    let response = setup_app(db)
        .oneshot(json_request("POST", "/questions/search", json!({"query": "TITLE"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["total_num_questions"], 2);
    assert_eq!(body["questions"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_questions_no_match() {
    let (db, _dir) = setup_test_db().await;
    let app = setup_app(db);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/questions/search", json!({"query": "mmmm"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_envelope(&extract_json(response).await, 404, "Not Found");

    let response = app
        .oneshot(test_request("GET", "/questions/search?query=mmm"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_search_folds_non_ascii_case() {
    let (db, _dir) = setup_test_db().await;
    let mut conn = db.acquire().await.unwrap();
    questions::insert_question(
        &mut conn,
        &NewQuestion {
            question: "Where is ÉCOLE located?".to_string(),
            answer: "Paris".to_string(),
            difficulty: 1,
            category: 3,
        },
    )
    .await
    .unwrap();
    drop(conn);

    let response = setup_app(db)
        .oneshot(json_request("POST", "/questions/search", json!({"query": "école"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["total_num_questions"], 1);
    assert_eq!(body["questions"][0]["question"], "Where is ÉCOLE located?");
}

#[tokio::test]
async fn test_search_paginates_matches() {
    let (db, _dir) = setup_test_db().await;
    let app = setup_app(db);

    let body = extract_json(
        app.clone()
            .oneshot(json_request("POST", "/questions/search?page=2", json!({"query": "?"})))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(body["total_num_questions"], 12);
    assert_eq!(body["questions"].as_array().unwrap().len(), 2);

    let body = extract_json(
        app.oneshot(json_request("POST", "/questions/search?page=3", json!({"query": "?"})))
            .await
            .unwrap(),
    )
    .await;
    assert!(body["questions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_wildcards_are_literal() {
    let (db, _dir) = setup_test_db().await;
    let response = setup_app(db)
        .oneshot(json_request("POST", "/questions/search", json!({"query": "%"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Quizzes
// =============================================================================

#[tokio::test]
async fn test_quiz_returns_unseen_question_in_category() {
    let (db, _dir) = setup_test_db().await;
    let app = setup_app(db);

    // Art has questions 4 and 5
    let response = app
        .oneshot(json_request(
            "POST",
            "/quizzes",
            json!({"quiz_category": {"type": "Art", "id": 2}, "previous_questions": [4]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["question"]["id"], 5);
    assert_eq!(body["question"]["category"], 2);
    assert_eq!(body["previous_questions"], json!([4, 5]));
}

#[tokio::test]
async fn test_quiz_accepts_string_category_id() {
    let (db, _dir) = setup_test_db().await;
    let response = setup_app(db)
        .oneshot(json_request(
            "POST",
            "/quizzes",
            json!({"quiz_category": {"type": "Science", "id": "1"}, "previous_questions": [1, 2]}),
        ))
        .await
        .unwrap();

    let body = extract_json(response).await;
    assert_eq!(body["question"]["id"], 3);
    assert_eq!(body["previous_questions"], json!([1, 2, 3]));
}

#[tokio::test]
async fn test_quiz_exhausted_category() {
    let (db, _dir) = setup_test_db().await;
    let response = setup_app(db)
        .oneshot(json_request(
            "POST",
            "/quizzes",
            json!({"quiz_category": {"type": "Science", "id": 1}, "previous_questions": [1, 2, 3]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["success"], true);
    assert!(body.get("question").is_none());
    assert_eq!(body["previous_questions"], json!([1, 2, 3]));
}

#[tokio::test]
async fn test_quiz_any_category_excludes_previous() {
    let (db, _dir) = setup_test_db().await;
    let app = setup_app(db);
    let previous: Vec<i64> = (1..=11).collect();

    for _ in 0..5 {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/quizzes",
                json!({"quiz_category": {"type": "click", "id": 0}, "previous_questions": previous}),
            ))
            .await
            .unwrap();
        let body = extract_json(response).await;
        assert_eq!(body["question"]["id"], 12);
    }
}

#[tokio::test]
async fn test_quiz_unknown_category() {
    let (db, _dir) = setup_test_db().await;
    let response = setup_app(db)
        .oneshot(json_request(
            "POST",
            "/quizzes",
            json!({"quiz_category": {"type": "Science", "id": 9}, "previous_questions": []}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["previous_questions"], json!([]));
}

#[tokio::test]
async fn test_quiz_invalid_category_id() {
    let (db, _dir) = setup_test_db().await;
    let response = setup_app(db)
        .oneshot(json_request(
            "POST",
            "/quizzes",
            json!({"quiz_category": {"type": "Science", "id": "science"}}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_envelope(&extract_json(response).await, 400, "Bad Request");
}
