#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::routes;
    use crate::tests::support::{state_for, touch_all};

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
        let res = app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
        let status = res.status();
        let body = res.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_healthz() {
        let dir = TempDir::new().unwrap();
        let (status, body) = get(routes::router(state_for(dir.path())), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_readyz() {
        let dir = TempDir::new().unwrap();
        let (status, body) = get(routes::router(state_for(dir.path())), "/readyz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ready");
    }

    #[tokio::test]
    async fn test_readyz_without_public_dir() {
        let dir = TempDir::new().unwrap();
        let app = routes::router(state_for(&dir.path().join("missing")));
        let (status, body) = get(app, "/readyz").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"]["code"], "SERVICE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_metrics_count_listings() {
        let dir = TempDir::new().unwrap();
        touch_all(dir.path(), "everydays", &["E_1.gif", "E_2.gif"]);
        let state = state_for(dir.path());

        let (status, _) = get(routes::router(state.clone()), "/api/everydays").await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = get(routes::router(state.clone()), "/").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = get(routes::router(state), "/metrics").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["listings_served"], 2);
        assert_eq!(json["files_listed"], 4);
        assert_eq!(json["pages_rendered"], 1);
        assert_eq!(json["listing_failures"], 0);
    }

    #[tokio::test]
    async fn test_metrics_prometheus() {
        let dir = TempDir::new().unwrap();
        let app = routes::router(state_for(dir.path()));
        let res = app
            .oneshot(Request::builder().uri("/metrics/prometheus").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap().starts_with("text/plain"));
        let body = res.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("# TYPE folio_listings_served counter"));
        assert!(text.contains("folio_mobile_redirects 0"));
    }

    #[tokio::test]
    async fn test_version() {
        let dir = TempDir::new().unwrap();
        let (status, body) = get(routes::router(state_for(dir.path())), "/version").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["name"], "folio");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }
}
