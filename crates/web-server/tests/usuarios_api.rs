//! End-to-end tests of the `/usuarios` routes against an in-memory store.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use database::MemoryUserStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use web_server::{build_router, AppState};

fn app() -> (Router, Arc<MemoryUserStore>) {
    let store = Arc::new(MemoryUserStore::new());
    let router = build_router(AppState::new(store.clone()));
    (router, store)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn create_list_update_delete_walkthrough() {
    let (app, _) = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/usuarios",
        Some(json!({ "name": "Ana", "email": "ana@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created, json!({ "id": 1, "name": "Ana", "email": "ana@x.com" }));

    let (status, listed) = send(&app, Method::GET, "/usuarios", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([{ "id": 1, "name": "Ana", "email": "ana@x.com" }]));

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/usuarios/1",
        Some(json!({ "name": "Ana B", "email": "ana@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({ "id": 1, "name": "Ana B", "email": "ana@x.com" }));

    let (status, deleted) = send(&app, Method::DELETE, "/usuarios/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({ "message": "Usuário deletado" }));

    let (status, again) = send(&app, Method::DELETE, "/usuarios/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(again["message"], "Usuário não encontrado");
    assert_eq!(again["error"], "Not Found");
}

#[tokio::test]
async fn created_ids_are_distinct() {
    let (app, _) = app();
    let mut ids = Vec::new();
    for name in ["Ana", "Bia", "Caio"] {
        let (_, user) = send(
            &app,
            Method::POST,
            "/usuarios",
            Some(json!({ "name": name, "email": "someone@x.com" })),
        )
        .await;
        ids.push(user["id"].as_i64().expect("id"));
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn client_supplied_id_is_ignored() {
    let (app, _) = app();
    let (status, created) = send(
        &app,
        Method::POST,
        "/usuarios",
        Some(json!({ "id": 42, "name": "Ana", "email": "ana@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 1);
}

#[tokio::test]
async fn missing_email_is_rejected_before_persistence() {
    let (app, store) = app();

    let (status, body) = send(&app, Method::POST, "/usuarios", Some(json!({ "name": "" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");
    assert!(body["message"].is_string());
    assert_eq!(body["details"][0]["field"], "email");
    assert_eq!(store.calls(), 0);
    assert!(store.snapshot().await.is_empty());
}

#[tokio::test]
async fn whitespace_only_name_is_rejected() {
    let (app, store) = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/usuarios",
        Some(json!({ "name": "   ", "email": "a@x.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], "name");
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn wrong_field_type_names_the_field() {
    let (app, _) = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/usuarios",
        Some(json!({ "name": 5, "email": "a@x.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], "name");
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let (app, store) = app();
    let huge_name = "a".repeat(3 * 1024 * 1024);

    let (status, body) = send(
        &app,
        Method::POST,
        "/usuarios",
        Some(json!({ "name": huge_name, "email": "a@x.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["statusCode"], 413);
    assert_eq!(body["error"], "Payload Too Large");
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn empty_name_and_bad_email_report_both_fields() {
    let (app, store) = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/usuarios",
        Some(json!({ "name": "", "email": "nope" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let mut fields: Vec<&str> = body["details"]
        .as_array()
        .expect("details")
        .iter()
        .filter_map(|detail| detail["field"].as_str())
        .collect();
    fields.sort_unstable();
    assert_eq!(fields, vec!["email", "name"]);
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn invalid_update_leaves_record_untouched() {
    let (app, store) = app();
    send(
        &app,
        Method::POST,
        "/usuarios",
        Some(json!({ "name": "Ana", "email": "ana@x.com" })),
    )
    .await;
    let calls_before = store.calls();

    let (status, _) = send(
        &app,
        Method::PUT,
        "/usuarios/1",
        Some(json!({ "name": "Ana B" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(store.calls(), calls_before);
    assert_eq!(store.snapshot().await[0].name, "Ana");
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found_and_changes_nothing() {
    let (app, store) = app();
    send(
        &app,
        Method::POST,
        "/usuarios",
        Some(json!({ "name": "Ana", "email": "ana@x.com" })),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/usuarios/99",
        Some(json!({ "name": "Zé", "email": "ze@x.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Usuário não encontrado");
    assert_eq!(store.snapshot().await.len(), 1);
}

#[tokio::test]
async fn non_integer_id_is_a_bad_request() {
    let (app, store) = app();

    let (status, body) = send(&app, Method::DELETE, "/usuarios/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], "id");
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn list_is_idempotent() {
    let (app, _) = app();
    send(
        &app,
        Method::POST,
        "/usuarios",
        Some(json!({ "name": "Ana", "email": "ana@x.com" })),
    )
    .await;

    let (_, first) = send(&app, Method::GET, "/usuarios", None).await;
    let (_, second) = send(&app, Method::GET, "/usuarios", None).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_table_lists_as_empty_array() {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, "/usuarios", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn persistence_failures_surface_as_500() {
    let store = Arc::new(MemoryUserStore::failing());
    let app = build_router(AppState::new(store.clone()));

    let (status, body) = send(
        &app,
        Method::POST,
        "/usuarios",
        Some(json!({ "name": "Ana", "email": "ana@x.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal Server Error");
    assert!(body["message"].is_string());
    // Attempted exactly once: no retry.
    assert_eq!(store.calls(), 1);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (app, _) = app();
    let (status, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/usuarios"].is_object());
    assert!(doc["paths"]["/usuarios/{id}"].is_object());
}
