use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use axum::{http::header, http::Method, middleware, Router};
use clap::Parser;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_backend::auth::{self, types::AuthConfig};
use portfolio_backend::store::{CdnClient, FirestoreClient};
use portfolio_backend::{build_router, AppState};

#[derive(Debug, Parser)]
#[command(name = "portfolio-backend", about = "Portfolio site backend server")]
struct Args {
    /// Address to bind
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
    bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Configuration errors are the only fatal category: without the signing
    // secret or admin password no session can ever be issued or verified.
    let auth_config = AuthConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let store = Arc::new(FirestoreClient::from_env().context("document store configuration")?);
    let media = Arc::new(CdnClient::from_env().context("media CDN configuration")?);

    let state = AppState::new(auth_config, store, media);
    let app = build_router(state.clone())
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer());
    let app = serve_static_site(app, state);

    let addr = SocketAddr::from((args.bind, args.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Serve the prebuilt static site if its directory exists.
///
/// The public pages come from `SITE_DIR`; the `/dashboard` subtree is the
/// admin shell and sits behind the auth gate, so hitting it without a valid
/// session cookie redirects to the login page before any file is served.
fn serve_static_site(app: Router, state: AppState) -> Router {
    let site_dir = std::env::var("SITE_DIR").unwrap_or_else(|_| "site/dist".to_string());

    if !std::path::Path::new(&site_dir).exists() {
        tracing::info!("Site directory not found at {}, serving API only", site_dir);
        return app;
    }

    tracing::info!("Serving site from {}", site_dir);
    let index_path = format!("{}/index.html", site_dir);
    let dashboard_dir = format!("{}/dashboard", site_dir);

    let dashboard = Router::new()
        .nest_service("/dashboard", ServeDir::new(dashboard_dir))
        .layer(middleware::from_fn_with_state(
            state,
            auth::require_session,
        ));

    let public = ServeDir::new(&site_dir).not_found_service(ServeFile::new(&index_path));

    app.merge(dashboard).fallback_service(public)
}

/// Build CORS layer based on environment configuration.
///
/// If CORS_ALLOWED_ORIGINS is set, only those origins are allowed. If not
/// set, same-origin deployment is assumed and no cross-origin access is
/// granted beyond the defaults.
fn build_cors_layer() -> CorsLayer {
    match std::env::var("CORS_ALLOWED_ORIGINS").ok() {
        Some(origins) => {
            let origins: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();

            if origins.is_empty() {
                tracing::warn!("CORS_ALLOWED_ORIGINS is set but empty, denying cross-origin use");
                CorsLayer::new()
            } else {
                tracing::info!("CORS configured for origins: {:?}", origins);
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(origins))
                    .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE])
                    .allow_credentials(true)
            }
        }
        None => CorsLayer::new(),
    }
}
