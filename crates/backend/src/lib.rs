//! Portfolio site backend: public content API, contact inbox, and a
//! password-gated admin API protected by a signed session cookie.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod store;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::auth::types::AuthConfig;
use crate::store::{ContentStore, MediaStore};

/// Process-wide dependencies, constructed once at startup and injected into
/// every handler through axum state. No module-level singletons.
#[derive(Clone)]
pub struct AppState {
    pub auth_config: Arc<AuthConfig>,
    pub store: Arc<dyn ContentStore>,
    pub media: Arc<dyn MediaStore>,
}

impl AppState {
    pub fn new(
        auth_config: AuthConfig,
        store: Arc<dyn ContentStore>,
        media: Arc<dyn MediaStore>,
    ) -> Self {
        Self {
            auth_config: Arc::new(auth_config),
            store,
            media,
        }
    }
}

/// Build the API router.
///
/// Only the `/api/admin` subtree sits behind the auth gate; every other
/// route is public. Static site serving is wired up separately in `main` so
/// tests can drive this router without touching the filesystem.
pub fn build_router(state: AppState) -> Router {
    let admin = Router::new()
        .route("/api/admin/profile", put(handlers::update_profile))
        .route("/api/admin/about", put(handlers::update_about))
        .route("/api/admin/skills", put(handlers::update_skills))
        .route("/api/admin/projects", put(handlers::update_projects))
        .route("/api/admin/certificates", put(handlers::update_certificates))
        .route("/api/admin/messages", get(handlers::list_messages))
        .route("/api/admin/upload/image", post(handlers::upload_image))
        .route("/api/admin/upload/resume", post(handlers::upload_resume))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_session,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/content", get(handlers::get_site_content))
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/session", get(auth::session_status))
        .merge(admin)
        .with_state(state)
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}
