//! HTTP route handlers and router assembly.
//!
//! - `health`: liveness, readiness, metrics and version endpoints
//! - `listings`: JSON listings and generated layouts per gallery
//! - `pages`: server-rendered HTML pages
//!
//! Anything not matched by a route is served from the public asset directory.

pub mod health;
pub mod listings;
pub mod pages;

use axum::http::header::CONTENT_TYPE;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::{routing::get, Router};
use tower_http::compression::predicate::{DefaultPredicate, Predicate};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::middleware::{device_router_middleware, security_headers, validation};
use crate::state::AppState;

/// Routes with fixed paths; the device router paths must not collide with them.
pub const RESERVED_PATHS: &[&str] = &[
    "/healthz",
    "/readyz",
    "/metrics",
    "/metrics/prometheus",
    "/version",
    "/reel",
    "/toy",
    "/image",
];

// Video is already compressed; gzip only burns CPU on it.
#[derive(Clone)]
struct NoVideoDefault(DefaultPredicate);

impl Predicate for NoVideoDefault {
    fn should_compress<B: axum::body::HttpBody>(&self, res: &axum::http::Response<B>) -> bool {
        if let Some(ct) = res.headers().get(CONTENT_TYPE) {
            if let Ok(s) = ct.to_str() {
                if s.starts_with("video/") {
                    return false;
                }
            }
        }
        self.0.should_compress(res)
    }
}

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    let cfg = state.config.clone();
    let static_assets = ServeDir::new(&cfg.assets.public_dir);
    let compression = CompressionLayer::new().compress_when(NoVideoDefault(DefaultPredicate::new()));

    let app = Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route("/metrics", get(health::metrics))
        .route("/metrics/prometheus", get(health::metrics_prometheus))
        .route("/version", get(health::version))
        .route("/api/{category}", get(listings::list_category))
        .route("/api/{category}/layout", get(listings::category_layout))
        .route(&cfg.device.root_path, get(pages::home_desktop))
        .route(&cfg.device.mobile_path, get(pages::home_mobile))
        .route("/reel", get(pages::reel))
        .route("/toy", get(pages::toy))
        .route("/image", get(pages::image))
        .fallback_service(static_assets)
        .layer(from_fn_with_state(state.clone(), device_router_middleware))
        .with_state(state)
        .layer(from_fn(validation::validate_request_middleware))
        .layer(compression)
        .layer(TraceLayer::new_for_http())
        .layer(from_fn_with_state(cfg, security_headers::security_headers_middleware));

    // CORS: permissive in debug builds for local front-end work, same-origin in release
    if cfg!(debug_assertions) {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
