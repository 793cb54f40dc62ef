//! Authentication middleware and handlers.
//!
//! Per-user accounts with Argon2 hashed passwords. Session tokens are
//! cryptographically random UUIDs, validated against a server-side session
//! store; tokens are invalidated on logout or server restart. Every
//! authenticated request carries a [`CurrentUser`] so downstream queries
//! can scope to the owning identity.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use axum::async_trait;
use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use tower_cookies::{Cookie, Cookies};
use uuid::Uuid;

use crate::db::queries::users;
use crate::error::{AppError, AppResult};
use crate::models::Credentials;
use crate::state::{AppState, Session};

/// Cookie name for the session token.
pub const SESSION_COOKIE: &str = "session";

/// Paths reachable without a session.
const PUBLIC_PATHS: [&str; 3] = ["/signup", "/login", "/health"];

/// The authenticated identity attached to a request by the middleware.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub id: i64,
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .copied()
            .ok_or_else(|| AppError::Auth("Authentication required".into()))
    }
}

/// Middleware that rejects unauthenticated requests and attaches the
/// session's user to the request.
pub async fn auth_middleware(
    State(state): State<AppState>,
    cookies: Cookies,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if PUBLIC_PATHS.contains(&request.uri().path()) {
        return next.run(request).await;
    }

    if let Some(session_cookie) = cookies.get(SESSION_COOKIE) {
        let user_id = state
            .sessions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(session_cookie.value())
            .map(|s| s.user_id);
        if let Some(user_id) = user_id {
            request.extensions_mut().insert(CurrentUser { id: user_id });
            return next.run(request).await;
        }
    }

    (StatusCode::UNAUTHORIZED, "Authentication required").into_response()
}

/// Register a new account.
pub async fn signup(
    State(state): State<AppState>,
    Json(creds): Json<Credentials>,
) -> AppResult<impl IntoResponse> {
    if creds.username.trim().is_empty() {
        return Err(AppError::Validation("Username must not be empty".into()));
    }
    if creds.password.len() < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters".into(),
        ));
    }

    let conn = state.db.get()?;
    if users::get_user_by_name(&conn, &creds.username)?.is_some() {
        return Err(AppError::Validation(format!(
            "Username '{}' is taken",
            creds.username
        )));
    }

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(creds.password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?
        .to_string();

    let user_id = users::create_user(&conn, &creds.username, &hash, creds.avatar_url.as_deref())?;
    tracing::info!(user_id, username = %creds.username, "Registered user");

    Ok((StatusCode::CREATED, Json(json!({ "id": user_id }))))
}

/// Exchange credentials for a session cookie.
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(creds): Json<Credentials>,
) -> AppResult<Json<serde_json::Value>> {
    let conn = state.db.get()?;
    let user = users::get_user_by_name(&conn, &creds.username)?
        .ok_or_else(|| AppError::Auth("Invalid username or password".into()))?;

    if !verify_password(&creds.password, &user.password_hash) {
        return Err(AppError::Auth("Invalid username or password".into()));
    }

    let session_token = Uuid::new_v4().to_string();
    let xsrf_token = Uuid::new_v4().to_string();
    state
        .sessions
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .insert(
            session_token.clone(),
            Session {
                user_id: user.id,
                xsrf_token: xsrf_token.clone(),
            },
        );

    let cookie = Cookie::build((SESSION_COOKIE, session_token))
        .path("/")
        .http_only(true)
        .same_site(tower_cookies::cookie::SameSite::Strict)
        .build();
    cookies.add(cookie);

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(json!({
        "id": user.id,
        "username": user.username,
        "avatar_url": user.avatar_url,
        "xsrf_token": xsrf_token,
    })))
}

/// Tear down the session. Any live snapshot subscriptions bound to it die
/// with the client connection.
pub async fn logout(State(state): State<AppState>, cookies: Cookies) -> impl IntoResponse {
    if let Some(session_cookie) = cookies.get(SESSION_COOKIE) {
        state
            .sessions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(session_cookie.value());
    }

    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .build();
    cookies.remove(cookie);

    StatusCode::NO_CONTENT
}

/// Profile of the signed-in user.
pub async fn me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<serde_json::Value>> {
    let conn = state.db.get()?;
    let profile = users::get_user(&conn, user.id)?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(Json(json!({
        "id": profile.id,
        "username": profile.username,
        "avatar_url": profile.avatar_url,
    })))
}

/// Verify a password against an Argon2 hash.
fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        tracing::error!("Invalid password hash in users table");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
