//! Integration tests for the API router against an in-memory store.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode},
};
use rollcall_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::api_router;

async fn setup() -> (Router, Arc<SqliteStore>) {
  let store = Arc::new(SqliteStore::open_in_memory().await.unwrap());
  (api_router(store.clone()), store)
}

async fn send(
  router: &Router,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> axum::response::Response {
  let builder = Request::builder().method(method).uri(uri);
  let req = match body {
    Some(v) => builder
      .header("content-type", "application/json")
      .body(Body::from(v.to_string()))
      .unwrap(),
    None => builder.body(Body::empty()).unwrap(),
  };
  router.clone().oneshot(req).await.unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

async fn create_jane(router: &Router) -> i64 {
  let resp = send(
    router,
    "POST",
    "/candidate",
    Some(json!({
      "first_name": "Jane",
      "last_name": "Doe",
      "industry_connected": false,
    })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  body_json(resp).await["id"].as_i64().unwrap()
}

// ─── Candidate create / read ─────────────────────────────────────────────────

#[tokio::test]
async fn create_then_get_roundtrip() {
  let (app, _store) = setup().await;

  let resp = send(
    &app,
    "POST",
    "/candidate",
    Some(json!({
      "first_name": "Jane",
      "last_name": "Doe",
      "industry_connected": false,
    })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let created = body_json(resp).await;
  assert_eq!(created["message"], "candidate created");
  assert_eq!(created["data"]["first_name"], "Jane");
  let id = created["id"].as_i64().unwrap();

  let resp = send(&app, "GET", &format!("/candidate/{id}"), None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let fetched = body_json(resp).await;
  assert_eq!(fetched["data"]["first_name"], "Jane");
  assert_eq!(fetched["data"]["last_name"], "Doe");
  assert_eq!(fetched["data"]["industry_connected"], false);
  assert_eq!(fetched["data"]["party_name"], Value::Null);
}

#[tokio::test]
async fn get_missing_candidate_returns_null_data() {
  let (app, _store) = setup().await;

  let resp = send(&app, "GET", "/candidate/9999", None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let json = body_json(resp).await;
  assert_eq!(json["data"], Value::Null);
}

#[tokio::test]
async fn list_candidates_returns_all_rows() {
  let (app, _store) = setup().await;
  create_jane(&app).await;
  create_jane(&app).await;

  let resp = send(&app, "GET", "/candidates", None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let json = body_json(resp).await;
  assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

// ─── Candidate validation ────────────────────────────────────────────────────

#[tokio::test]
async fn create_missing_first_name_is_rejected() {
  let (app, _store) = setup().await;

  let resp = send(
    &app,
    "POST",
    "/candidate",
    Some(json!({ "last_name": "Doe", "industry_connected": true })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let json = body_json(resp).await;
  assert!(
    json["error"]
      .as_array()
      .unwrap()
      .contains(&json!("first_name is required"))
  );

  // No row was inserted.
  let resp = send(&app, "GET", "/candidates", None).await;
  let json = body_json(resp).await;
  assert!(json["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn create_rejects_numeric_industry_connected() {
  let (app, _store) = setup().await;

  let resp = send(
    &app,
    "POST",
    "/candidate",
    Some(json!({
      "first_name": "Jane",
      "last_name": "Doe",
      "industry_connected": 1,
    })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let json = body_json(resp).await;
  assert_eq!(json["error"], json!(["industry_connected must be true or false"]));
}

// ─── Party affiliation ───────────────────────────────────────────────────────

#[tokio::test]
async fn update_party_then_get_resolves_party_name() {
  let (app, store) = setup().await;
  let party_id = store.seed_party("Republican").await.unwrap();
  let id = create_jane(&app).await;

  let resp = send(
    &app,
    "PUT",
    &format!("/candidate/{id}"),
    Some(json!({ "party_id": party_id })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let json = body_json(resp).await;
  assert_eq!(json["changes"], 1);
  assert_eq!(json["data"]["party_id"], party_id);

  let resp = send(&app, "GET", &format!("/candidate/{id}"), None).await;
  let json = body_json(resp).await;
  assert_eq!(json["data"]["party_id"], party_id);
  assert_eq!(json["data"]["party_name"], "Republican");
}

#[tokio::test]
async fn update_party_requires_party_id() {
  let (app, _store) = setup().await;
  let id = create_jane(&app).await;

  let resp =
    send(&app, "PUT", &format!("/candidate/{id}"), Some(json!({}))).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let json = body_json(resp).await;
  assert_eq!(json["error"], json!(["party_id is required"]));
}

#[tokio::test]
async fn update_party_rejects_non_numeric_party_id() {
  let (app, _store) = setup().await;
  let id = create_jane(&app).await;

  let resp = send(
    &app,
    "PUT",
    &format!("/candidate/{id}"),
    Some(json!({ "party_id": "one" })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let json = body_json(resp).await;
  assert_eq!(json["error"], json!(["party_id must be a number"]));
}

#[tokio::test]
async fn update_missing_candidate_reports_zero_changes() {
  let (app, store) = setup().await;
  let party_id = store.seed_party("Republican").await.unwrap();

  let resp = send(
    &app,
    "PUT",
    "/candidate/9999",
    Some(json!({ "party_id": party_id })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let json = body_json(resp).await;
  assert_eq!(json["changes"], 0);
}

// ─── Deletes ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_missing_candidate_reports_zero_changes() {
  let (app, _store) = setup().await;

  let resp = send(&app, "DELETE", "/candidate/9999", None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let json = body_json(resp).await;
  assert_eq!(json["message"], "candidate deleted");
  assert_eq!(json["changes"], 0);
}

#[tokio::test]
async fn delete_party_leaves_referencing_candidates_intact() {
  let (app, store) = setup().await;
  let party_id = store.seed_party("Republican").await.unwrap();
  let id = create_jane(&app).await;
  send(
    &app,
    "PUT",
    &format!("/candidate/{id}"),
    Some(json!({ "party_id": party_id })),
  )
  .await;

  let resp = send(&app, "DELETE", &format!("/party/{party_id}"), None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let json = body_json(resp).await;
  assert_eq!(json["changes"], 1);

  // The candidate survives with its dangling party_id; the LEFT JOIN
  // resolves the name to null.
  let resp = send(&app, "GET", &format!("/candidate/{id}"), None).await;
  let json = body_json(resp).await;
  assert_eq!(json["data"]["party_id"], party_id);
  assert_eq!(json["data"]["party_name"], Value::Null);
}

// ─── Parties ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_and_get_parties() {
  let (app, store) = setup().await;
  let a = store.seed_party("Republican").await.unwrap();
  store.seed_party("Democrat").await.unwrap();

  let resp = send(&app, "GET", "/parties", None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let json = body_json(resp).await;
  assert_eq!(json["data"].as_array().unwrap().len(), 2);

  let resp = send(&app, "GET", &format!("/party/{a}"), None).await;
  let json = body_json(resp).await;
  assert_eq!(json["data"]["name"], "Republican");

  let resp = send(&app, "GET", "/party/9999", None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let json = body_json(resp).await;
  assert_eq!(json["data"], Value::Null);
}

// ─── Routing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn unknown_route_returns_404_with_empty_body() {
  let (app, _store) = setup().await;

  let resp = send(&app, "GET", "/ballots", None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap();
  assert!(bytes.is_empty());
}

#[tokio::test]
async fn wrong_method_on_known_path_returns_404() {
  let (app, _store) = setup().await;

  let resp = send(&app, "POST", "/candidates", None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap();
  assert!(bytes.is_empty());
}
