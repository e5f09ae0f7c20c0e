//! End-to-end tests against an on-disk database
//!
//! These drive the full router (CORS and tracing layers included) the way the
//! front-end does: one shared path, arguments in JSON bodies.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use flashcards::{
    api::{build_router, AppState},
    db::init_database,
};

async fn setup() -> (tempfile::TempDir, Router) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("flashcards.db");
    let pool = init_database(path.to_str().unwrap())
        .await
        .expect("Failed to create test database");
    (dir, build_router(AppState::new(pool)))
}

async fn send(app: &Router, method: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri("/api/flashcards");
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn pairs(cards: &Value) -> Vec<(String, String)> {
    cards
        .as_array()
        .unwrap()
        .iter()
        .map(|c| {
            (
                c["question"].as_str().unwrap().to_string(),
                c["answer"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

#[tokio::test]
async fn test_create_update_delete_scenario() {
    let (_dir, app) = setup().await;

    let (status, body) = send(&app, "POST", Some(json!({"question": "2+2?", "answer": "4"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "question": "2+2?", "answer": "4"}));

    let (status, body) = send(&app, "GET", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pairs(&body), vec![("2+2?".to_string(), "4".to_string())]);

    let (status, body) = send(
        &app,
        "PUT",
        Some(json!({"oldQuestion": "2+2?", "newQuestion": "2+3?", "newAnswer": "5"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Flashcard updated successfully");

    let (_, body) = send(&app, "GET", None).await;
    assert_eq!(pairs(&body), vec![("2+3?".to_string(), "5".to_string())]);

    let (status, body) = send(&app, "DELETE", Some(json!({"question": "2+3?"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Flashcard deleted successfully");

    let (status, body) = send(&app, "GET", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_update_leaves_other_rows_untouched() {
    let (_dir, app) = setup().await;

    for (q, a) in [("a?", "1"), ("b?", "2"), ("c?", "3")] {
        let (status, _) = send(&app, "POST", Some(json!({"question": q, "answer": a}))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, _) = send(
        &app,
        "PUT",
        Some(json!({"oldQuestion": "b?", "newQuestion": "B?", "newAnswer": "two"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", None).await;
    assert_eq!(
        pairs(&body),
        vec![
            ("a?".to_string(), "1".to_string()),
            ("B?".to_string(), "two".to_string()),
            ("c?".to_string(), "3".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_duplicate_questions_are_accepted() {
    let (_dir, app) = setup().await;

    let (_, first) = send(&app, "POST", Some(json!({"question": "dup", "answer": "x"}))).await;
    let (_, second) = send(&app, "POST", Some(json!({"question": "dup", "answer": "y"}))).await;
    assert_ne!(first["id"], second["id"]);

    let (status, _) = send(&app, "DELETE", Some(json!({"question": "dup"}))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_rejections_leave_store_unchanged() {
    let (_dir, app) = setup().await;
    send(&app, "POST", Some(json!({"question": "keep?", "answer": "yes"}))).await;

    let (status, _) = send(&app, "POST", Some(json!({"question": "", "answer": "4"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "PUT",
        Some(json!({"oldQuestion": "missing?", "newQuestion": "x", "newAnswer": "y"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", Some(json!({"question": "missing?"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, "GET", None).await;
    assert_eq!(pairs(&body), vec![("keep?".to_string(), "yes".to_string())]);
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flashcards.db");
    let path = path.to_str().unwrap();

    let pool = init_database(path).await.unwrap();
    let app = build_router(AppState::new(pool.clone()));
    send(&app, "POST", Some(json!({"question": "2+2?", "answer": "4"}))).await;
    pool.close().await;

    let app = build_router(AppState::new(init_database(path).await.unwrap()));
    let (_, body) = send(&app, "GET", None).await;
    assert_eq!(body, json!([{"id": 1, "question": "2+2?", "answer": "4"}]));
}
