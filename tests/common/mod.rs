//! Shared test utilities for integration tests.
//!
//! Provides a `TestClient` that simulates a browser session against an
//! in-memory database, carrying the session cookie between requests.
//! Methods are intentionally broad to support various test scenarios
//! across different test files.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Request, StatusCode};
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use fintrack::auth;
use fintrack::config::Config;
use fintrack::db::{create_in_memory_pool, migrations};
use fintrack::handlers;
use fintrack::live::SnapshotHub;
use fintrack::state::AppState;
use fintrack::xsrf;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use tower_cookies::CookieManagerLayer;

/// A test client that simulates one browser session, allowing sequential
/// authenticated requests against the application.
pub struct TestClient {
    state: AppState,
    session_cookie: Mutex<Option<String>>,
}

impl TestClient {
    /// Create a new test client with a fresh in-memory database.
    pub fn new() -> Self {
        let pool = create_in_memory_pool().expect("Failed to create in-memory pool");
        {
            let conn = pool.get().expect("Failed to get connection");
            migrations::run_migrations(&conn, Path::new("migrations"))
                .expect("Failed to run migrations");
        }

        let config = Config {
            host: "127.0.0.1".into(),
            port: 7071,
            database_path: PathBuf::from(":memory:"),
            migrations_path: PathBuf::from("migrations"),
        };

        let state = AppState {
            db: pool,
            config: Arc::new(config),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            hub: SnapshotHub::new(),
        };

        Self {
            state,
            session_cookie: Mutex::new(None),
        }
    }

    /// Create a client with one registered, logged-in user.
    pub async fn with_user(username: &str) -> Self {
        let client = Self::new();
        client.signup_and_login(username).await;
        client
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Router mirroring the production stack minus the XSRF layer, which
    /// has dedicated coverage.
    pub fn router(&self) -> Router {
        Router::new()
            .merge(handlers::routes())
            .route("/signup", post(auth::signup))
            .route("/login", post(auth::login))
            .route("/logout", post(auth::logout))
            .route("/api/me", get(auth::me))
            .layer(middleware::from_fn_with_state(
                self.state.clone(),
                auth::auth_middleware,
            ))
            .layer(CookieManagerLayer::new())
            .with_state(self.state.clone())
    }

    /// The same router stacked like production, XSRF layer included.
    pub fn router_with_xsrf(&self) -> Router {
        Router::new()
            .merge(handlers::routes())
            .route("/signup", post(auth::signup))
            .route("/login", post(auth::login))
            .route("/logout", post(auth::logout))
            .route("/api/me", get(auth::me))
            .layer(middleware::from_fn_with_state(
                self.state.clone(),
                auth::auth_middleware,
            ))
            .layer(middleware::from_fn_with_state(
                self.state.clone(),
                xsrf::xsrf_middleware,
            ))
            .layer(CookieManagerLayer::new())
            .with_state(self.state.clone())
    }

    async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<&Value>,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(cookie) = self.session_cookie.lock().unwrap().clone() {
            builder = builder.header(COOKIE, cookie);
        }

        let request = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();

        // Remember any newly issued session cookie
        if let Some(set_cookie) = response.headers().get(SET_COOKIE) {
            if let Ok(value) = set_cookie.to_str() {
                let pair = value.split(';').next().unwrap_or_default().to_string();
                *self.session_cookie.lock().unwrap() = Some(pair);
            }
        }

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&bytes).to_string())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        self.request("GET", uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, String) {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn put_json(&self, uri: &str, body: &Value) -> (StatusCode, String) {
        self.request("PUT", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, String) {
        self.request("DELETE", uri, None).await
    }

    /// Get JSON from an endpoint and parse it.
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        uri: &str,
    ) -> (StatusCode, Option<T>) {
        let (status, body) = self.get(uri).await;
        let parsed = serde_json::from_str(&body).ok();
        (status, parsed)
    }

    // =========================================================================
    // Helper methods for driving the API
    // =========================================================================

    /// Register an account and log in, switching this client's session to it.
    pub async fn signup_and_login(&self, username: &str) {
        let creds = json!({ "username": username, "password": "hunter2hunter2" });
        let (status, _) = self.post_json("/signup", &creds).await;
        assert_eq!(status, StatusCode::CREATED, "signup failed for {username}");

        let (status, _) = self.post_json("/login", &creds).await;
        assert_eq!(status, StatusCode::OK, "login failed for {username}");
    }

    /// Create an expense via POST, returning its id on success.
    pub async fn create_expense(
        &self,
        amount_cents: i64,
        category: &str,
        is_need: bool,
    ) -> Option<i64> {
        let (status, body) = self
            .post_json(
                "/api/expenses",
                &json!({
                    "amount_cents": amount_cents,
                    "category": category,
                    "is_need": is_need,
                    "description": null,
                }),
            )
            .await;

        if status != StatusCode::CREATED {
            return None;
        }
        serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v["id"].as_i64())
    }

    /// Create a custom category via POST, returning its id on success.
    pub async fn create_category(&self, name: &str) -> Option<i64> {
        let (status, body) = self
            .post_json("/api/categories", &json!({ "name": name }))
            .await;

        if status != StatusCode::CREATED {
            return None;
        }
        serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v["id"].as_i64())
    }

    /// Set the monthly budget, in cents.
    pub async fn set_budget(&self, monthly_limit_cents: i64) -> bool {
        let (status, _) = self
            .put_json(
                "/api/budget",
                &json!({ "monthly_limit_cents": monthly_limit_cents }),
            )
            .await;
        status == StatusCode::OK
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}
