//! The auth gate: request interception for the protected prefix.
//!
//! Applied only to the protected sub-router; everything else bypasses it.
//! The decision is a pure function of (cookie set, clock): a valid session
//! cookie lets the request through unmodified, anything else redirects to the
//! login page. Missing, malformed, forged and expired cookies are
//! indistinguishable to the caller.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::AppState;

use super::jwt;
use super::types::{AuthConfig, Claims};

/// Where unauthenticated requests to the protected prefix are sent.
pub const LOGIN_PATH: &str = "/login";

/// Middleware function that requires a valid session.
///
/// Use with `axum::middleware::from_fn_with_state` on the protected routes.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    match session_from_headers(request.headers(), &state.auth_config) {
        Some(_) => next.run(request).await,
        None => Redirect::to(LOGIN_PATH).into_response(),
    }
}

/// Extract and validate the session from request headers.
///
/// Returns `None` uniformly for a missing cookie, an unparseable token, a bad
/// signature or an expired token, by design.
pub fn session_from_headers(headers: &HeaderMap, config: &AuthConfig) -> Option<Claims> {
    let token = extract_session_cookie(headers, &config.cookie_name)?;
    jwt::validate_token(config, &token).ok()
}

fn extract_session_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;

    for cookie_str in cookie_header.split(';') {
        if let Ok(cookie) = cookie::Cookie::parse(cookie_str.trim()) {
            if cookie.name() == cookie_name {
                return Some(cookie.value().to_string());
            }
        }
    }

    None
}

/// Build the session cookie string for a freshly issued token.
pub fn build_session_cookie(name: &str, value: &str, days: i64) -> String {
    let max_age = days * 24 * 60 * 60;
    let secure = if std::env::var("RUST_ENV").unwrap_or_default() == "production" {
        "; Secure"
    } else {
        ""
    };
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}{}",
        name, value, max_age, secure
    )
}

/// Build the expired cookie that clears the session on logout.
pub fn clear_session_cookie(name: &str) -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", name)
}
