//! XSRF (Cross-Site Request Forgery) protection middleware.
//!
//! State-changing requests (POST, PUT, DELETE, PATCH) must carry the
//! `X-XSRF-Token` header matching the token bound to the request's own
//! session. Each login mints a fresh token for that session only; other
//! live sessions, of the same user or anyone else, keep theirs. The login
//! and signup endpoints are exempt, since no token exists yet.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tower_cookies::Cookies;

use crate::auth::SESSION_COOKIE;
use crate::state::AppState;

/// The header name for XSRF tokens.
pub const XSRF_HEADER: &str = "X-XSRF-Token";

/// Endpoints reachable without a token.
const EXEMPT_PATHS: [&str; 2] = ["/login", "/signup"];

/// Middleware that validates XSRF tokens on state-changing requests.
pub async fn xsrf_middleware(
    State(state): State<AppState>,
    cookies: Cookies,
    request: Request<Body>,
    next: Next,
) -> Response {
    if !matches!(
        request.method(),
        &Method::POST | &Method::PUT | &Method::DELETE | &Method::PATCH
    ) {
        return next.run(request).await;
    }

    if EXEMPT_PATHS.contains(&request.uri().path()) {
        return next.run(request).await;
    }

    // Without a live session there is no token to check; the auth layer
    // rejects the request instead.
    let Some(session_cookie) = cookies.get(SESSION_COOKIE) else {
        return next.run(request).await;
    };
    let expected = state
        .sessions
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .get(session_cookie.value())
        .map(|s| s.xsrf_token.clone());
    let Some(expected) = expected else {
        return next.run(request).await;
    };

    let header_token = request
        .headers()
        .get(XSRF_HEADER)
        .and_then(|v| v.to_str().ok());

    match header_token {
        Some(token) if token == expected => next.run(request).await,
        _ => {
            tracing::warn!(path = %request.uri().path(), "Rejected request with missing or invalid XSRF token");
            (StatusCode::FORBIDDEN, "Invalid XSRF token").into_response()
        }
    }
}
