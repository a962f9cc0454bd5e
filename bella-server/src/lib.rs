//! Bella Italia static host
//!
//! Serves the compiled single-page app, answers client-side routes with the
//! app shell and exposes health probes under `/api/health`.

pub mod config;
pub mod error;
pub mod health;
pub mod logging;
pub mod shutdown;

use axum::{
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub use config::SiteConfig;
pub use health::HealthChecker;
pub use shutdown::ShutdownCoordinator;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the full HTTP router for the given configuration
pub fn build_router(config: &SiteConfig) -> Router {
    let index_path = config.site.index_path();
    let checker = Arc::new(HealthChecker::new(VERSION, index_path.clone()));

    // Unknown paths fall through to the app shell so the client router
    // can resolve them (with 200, not 404).
    let serve_dir = ServeDir::new(&config.site.dist_dir).fallback(ServeFile::new(index_path));

    let api = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/live", get(health::liveness_probe))
        .route("/api/health/ready", get(health::readiness_probe))
        .route("/api/*rest", any(error::api_not_found))
        .with_state(checker);

    Router::new()
        .merge(api)
        .fallback_service(serve_dir)
        .layer(TraceLayer::new_for_http())
}
