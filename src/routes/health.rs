use crate::error::{AppError, AppResult};
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

// Health check endpoint - lightweight
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

// Readiness: the public asset root must exist
pub async fn readyz(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let public_dir = state.config.assets.public_dir.clone();
    let exists = tokio::task::spawn_blocking(move || public_dir.is_dir()).await?;
    if !exists {
        return Err(AppError::ServiceUnavailable(format!(
            "not ready: asset directory {} missing",
            state.config.assets.public_dir.display()
        )));
    }
    Ok((StatusCode::OK, "ready"))
}

// Metrics endpoint: returns JSON snapshot
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.get_snapshot())
}

// Prometheus-compatible text exposition format
pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    let m = state.metrics.get_snapshot();
    let body = format!(
        "# HELP folio_listings_served Listings served\n# TYPE folio_listings_served counter\nfolio_listings_served {}\n\
# HELP folio_listing_failures Listings that failed and were served empty\n# TYPE folio_listing_failures counter\nfolio_listing_failures {}\n\
# HELP folio_files_listed Files returned across all listings\n# TYPE folio_files_listed counter\nfolio_files_listed {}\n\
# HELP folio_pages_rendered HTML pages rendered\n# TYPE folio_pages_rendered counter\nfolio_pages_rendered {}\n\
# HELP folio_mobile_redirects Mobile clients redirected to the mobile page\n# TYPE folio_mobile_redirects counter\nfolio_mobile_redirects {}\n\
# HELP folio_desktop_redirects Desktop clients redirected to the root page\n# TYPE folio_desktop_redirects counter\nfolio_desktop_redirects {}\n\
# HELP folio_uptime_seconds Uptime seconds\n# TYPE folio_uptime_seconds gauge\nfolio_uptime_seconds {}\n",
        m.listings_served,
        m.listing_failures,
        m.files_listed,
        m.pages_rendered,
        m.mobile_redirects,
        m.desktop_redirects,
        m.uptime_seconds,
    );
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}

// Version/Build info endpoint (JSON)
pub async fn version() -> impl IntoResponse {
    let body = serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "package": {
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "authors": env!("CARGO_PKG_AUTHORS"),
            "license": env!("CARGO_PKG_LICENSE"),
        },
        "build": {
            "profile": if cfg!(debug_assertions) { "debug" } else { "release" },
            "os": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
        }
    });
    (StatusCode::OK, Json(body))
}
