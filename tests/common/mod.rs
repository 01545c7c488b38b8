//! Shared test utilities for integration tests.
//!
//! `TestClient` drives the full router against a fresh in-memory database with migrations
//! applied, one request at a time.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use expense_tracker::db::{create_in_memory_pool, migrations};
use expense_tracker::server;
use expense_tracker::state::AppState;
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::path::Path;
use tower::ServiceExt;

pub struct TestClient {
    state: AppState,
}

impl TestClient {
    pub fn new() -> Self {
        let pool = create_in_memory_pool().expect("Failed to create in-memory pool");
        {
            let conn = pool.get().expect("Failed to get connection");
            migrations::run_migrations(&conn, Path::new("migrations"))
                .expect("Failed to run migrations");
        }

        let state = AppState { db: pool };

        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn router(&self) -> Router {
        server::router(self.state.clone())
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.router().oneshot(request).await.unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&body).to_string())
    }

    /// Make a GET request and return status and body.
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    /// GET and parse the body as JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, uri: &str) -> (StatusCode, Option<T>) {
        let (status, body) = self.get(uri).await;
        (status, serde_json::from_str(&body).ok())
    }

    /// POST a raw body with a JSON content type.
    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, String) {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        let (status, text) = self.post_raw(uri, &body.to_string()).await;
        (status, serde_json::from_str(&text).unwrap_or(Value::Null))
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        let (status, text) = self
            .send(
                Request::builder()
                    .method("DELETE")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;
        (status, serde_json::from_str(&text).unwrap_or(Value::Null))
    }

    // =========================================================================
    // Helpers for creating entities through the API
    // =========================================================================

    /// Create an expense and return its id.
    pub async fn create_expense(&self, amount: f64, category: &str, date: &str) -> i64 {
        let (status, body) = self
            .post_json(
                "/api/expenses",
                &json!({
                    "amount": amount,
                    "category": category,
                    "date": date,
                    "note": format!("{category} on {date}"),
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
        body["id"].as_i64().expect("id in response")
    }

    pub async fn create_category(&self, name: &str) -> (StatusCode, Value) {
        self.post_json("/api/categories", &json!({ "name": name }))
            .await
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// `YYYY-MM-DD` for `days` days before today (UTC).
pub fn days_ago(days: i64) -> String {
    (Utc::now().date_naive() - Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}
