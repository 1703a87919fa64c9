//! Authentication HTTP handlers: login, logout, session probe.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use portfolio_types::{LoginResponse, SessionStatusResponse};
use serde::Deserialize;

use crate::AppState;

use super::middleware::{
    build_session_cookie, clear_session_cookie, session_from_headers, LOGIN_PATH,
};
use super::jwt;

/// Where a successful login lands.
const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub password: String,
}

/// Handle the login form submission.
///
/// There is a single shared admin credential, so the failure message never
/// distinguishes "unknown user" from "wrong password". On success the session
/// cookie is set and the browser is sent to the dashboard.
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let config = &state.auth_config;

    if form.password != config.admin_password {
        tracing::warn!("rejected admin login attempt");
        return (
            StatusCode::OK,
            Json(LoginResponse {
                success: false,
                error: Some("Invalid credentials".to_string()),
            }),
        )
            .into_response();
    }

    let token = match jwt::create_token(config) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("failed to issue session token: {:?}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let cookie = build_session_cookie(&config.cookie_name, &token, config.token_duration_days);
    let mut response = Redirect::to(DASHBOARD_PATH).into_response();
    if let Ok(cookie_value) = cookie.parse() {
        response.headers_mut().insert(header::SET_COOKIE, cookie_value);
    }

    tracing::info!("admin session issued");
    response
}

/// Handle logout: clear the session cookie and return to the login page.
///
/// Stateless sessions have no server side to tear down; destruction is the
/// cookie clearance itself. The token remains cryptographically valid until
/// its embedded expiry, which is accepted behavior for this deployment.
pub async fn logout(State(state): State<AppState>) -> Response {
    let cookie = clear_session_cookie(&state.auth_config.cookie_name);
    let mut response = Redirect::to(LOGIN_PATH).into_response();
    if let Ok(cookie_value) = cookie.parse() {
        response.headers_mut().insert(header::SET_COOKIE, cookie_value);
    }
    response
}

/// Report whether the caller currently holds a valid session.
///
/// Lets the dashboard shell probe its own state without triggering the
/// redirect behavior of the auth gate.
pub async fn session_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse> {
    Json(SessionStatusResponse {
        authenticated: session_from_headers(&headers, &state.auth_config).is_some(),
    })
}
