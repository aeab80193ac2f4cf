//! End-to-end tests for the games REST routes.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::{NamedTempFile, TempDir};
use tower::ServiceExt;

use velha::{GameResultRepository, MatchRecorder, api};

fn setup_app() -> (NamedTempFile, Router) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    let repo = GameResultRepository::new(db_path);
    repo.run_migrations().expect("Migrations failed");
    (db_file, api::router(MatchRecorder::new(repo)))
}

/// Router over a database path whose parent directory does not exist, so
/// every storage call fails to connect.
fn setup_unreachable_app() -> (TempDir, Router) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir
        .path()
        .join("missing")
        .join("velha.db")
        .to_str()
        .expect("Invalid path")
        .to_string();

    let repo = GameResultRepository::new(db_path);
    (dir, api::router(MatchRecorder::new(repo)))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes()
        .to_vec();
    (status, bytes)
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let value = serde_json::from_slice(&bytes).expect("Body was not JSON");
    (status, value)
}

#[tokio::test]
async fn test_liveness() {
    let (_db, app) = setup_app();
    let (status, bytes) = send(&app, "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(bytes).expect("utf8"),
        "Tic-tac-toe server is running and connected to the database"
    );
}

#[tokio::test]
async fn test_create_returns_created_record() {
    let (_db, app) = setup_app();
    let (status, body) = send_json(
        &app,
        "POST",
        "/games",
        Some(json!({"winner": "X", "name": "Amanda vs. Bot"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["winner"], "X");
    assert_eq!(body["name"], "Amanda vs. Bot");
    assert!(body["id"].as_i64().expect("id") > 0);
    let created_at = body["createdAt"].as_str().expect("createdAt");
    assert!(created_at.ends_with('Z'));
}

#[tokio::test]
async fn test_create_empty_name_gets_default() {
    let (_db, app) = setup_app();
    let (status, body) = send_json(&app, "POST", "/games", Some(json!({"winner": "Empate", "name": ""}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["winner"], "Empate");
    assert_eq!(body["name"], "Partida Anônima");
}

#[tokio::test]
async fn test_create_without_name_gets_default() {
    let (_db, app) = setup_app();
    let (status, body) = send_json(&app, "POST", "/games", Some(json!({"winner": "O"}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Partida Anônima");
}

#[tokio::test]
async fn test_create_unknown_winner_rejected() {
    let (_db, app) = setup_app();
    let (status, body) = send_json(&app, "POST", "/games", Some(json!({"winner": "Z"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (_, list) = send_json(&app, "GET", "/games", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_list_newest_first() {
    let (_db, app) = setup_app();
    send_json(&app, "POST", "/games", Some(json!({"winner": "X", "name": "first"}))).await;
    send_json(&app, "POST", "/games", Some(json!({"winner": "O", "name": "second"}))).await;

    let (status, body) = send_json(&app, "GET", "/games", None).await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .map(|g| g["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["second", "first"]);
}

#[tokio::test]
async fn test_update_keeps_id_and_timestamp() {
    let (_db, app) = setup_app();
    let (_, created) = send_json(
        &app,
        "POST",
        "/games",
        Some(json!({"winner": "X", "name": "Amanda vs. Bot"})),
    )
    .await;
    let id = created["id"].as_i64().expect("id");

    let (status, updated) = send_json(
        &app,
        "PUT",
        &format!("/games/{}", id),
        Some(json!({"winner": "O", "name": "Rematch"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_eq!(updated["winner"], "O");
    assert_eq!(updated["name"], "Rematch");
}

#[tokio::test]
async fn test_update_null_name_clears_it() {
    let (_db, app) = setup_app();
    let (_, created) = send_json(&app, "POST", "/games", Some(json!({"winner": "X", "name": "tmp"}))).await;
    let id = created["id"].as_i64().expect("id");

    let (status, updated) = send_json(&app, "PUT", &format!("/games/{}", id), Some(json!({"name": null}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["winner"], "X");
    assert_eq!(updated["name"], Value::Null);
}

#[tokio::test]
async fn test_update_missing_id_not_found() {
    let (_db, app) = setup_app();
    let (status, body) = send_json(&app, "PUT", "/games/999", Some(json!({"winner": "X"}))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Game 999 not found");
}

#[tokio::test]
async fn test_non_numeric_id_rejected() {
    let (_db, app) = setup_app();
    let (status, body) = send_json(&app, "DELETE", "/games/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid game id: abc");
}

#[tokio::test]
async fn test_delete_then_absent() {
    let (_db, app) = setup_app();
    let (_, created) = send_json(&app, "POST", "/games", Some(json!({"winner": "O"}))).await;
    let uri = format!("/games/{}", created["id"].as_i64().expect("id"));

    let (status, body) = send_json(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Game deleted"}));

    let (_, list) = send_json(&app, "GET", "/games", None).await;
    assert_eq!(list, json!([]));

    let (status, body) = send_json(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().expect("error").contains("not found"));
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (_db, app) = setup_app();
    let request = Request::builder()
        .method("GET")
        .uri("/games")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .expect("Failed to build request");

    let response = app.oneshot(request).await.expect("Request failed");
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("CORS header"),
        "*"
    );
}

#[tokio::test]
async fn test_put_then_list_shows_updated_record() {
    let (_db, app) = setup_app();
    let (_, created) = send_json(&app, "POST", "/games", Some(json!({"winner": "X", "name": "first"}))).await;
    let id = created["id"].as_i64().expect("id");

    let (status, _) = send_json(
        &app,
        "PUT",
        &format!("/games/{}", id),
        Some(json!({"winner": "Empate", "name": "Rematch"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = send_json(&app, "GET", "/games", None).await;
    let games = list.as_array().expect("array");
    assert_eq!(games.len(), 1);
    assert_eq!(games[0]["id"], created["id"]);
    assert_eq!(games[0]["winner"], "Empate");
    assert_eq!(games[0]["name"], "Rematch");
    assert_eq!(games[0]["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn test_storage_fault_fixed_messages() {
    let (_dir, app) = setup_unreachable_app();

    let cases = [
        ("POST", "/games", Some(json!({"winner": "X", "name": "a"})), "Failed to save game"),
        ("GET", "/games", None, "Failed to fetch games"),
        ("PUT", "/games/1", Some(json!({"winner": "O"})), "Failed to update game"),
        ("DELETE", "/games/1", None, "Failed to delete game"),
    ];

    for (method, uri, body, message) in cases {
        let (status, response) = send_json(&app, method, uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{} {}", method, uri);
        assert_eq!(response, json!({"error": message}), "{} {}", method, uri);
    }
}
