#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use std::sync::atomic::Ordering;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::config::AppConfig;
    use crate::middleware::{classify, redirect_target, DeviceClass};
    use crate::routes;
    use crate::tests::support::state_for;

    const IPHONE: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148";
    const DESKTOP: &str =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

    #[test]
    fn test_classify() {
        let indicators = AppConfig::default().device.mobile_indicators;
        assert_eq!(classify(Some(IPHONE), &indicators), DeviceClass::Mobile);
        assert_eq!(classify(Some("Opera/9.80 (J2ME/MIDP; OPERA MINI/9)"), &indicators), DeviceClass::Mobile);
        assert_eq!(classify(Some("Mozilla/5.0 (Linux; Android 14)"), &indicators), DeviceClass::Mobile);
        assert_eq!(classify(Some(DESKTOP), &indicators), DeviceClass::Desktop);
        assert_eq!(classify(Some(""), &indicators), DeviceClass::Desktop);
        assert_eq!(classify(None, &indicators), DeviceClass::Desktop);
    }

    #[test]
    fn test_redirect_target() {
        let device = AppConfig::default().device;
        assert_eq!(redirect_target(DeviceClass::Mobile, "/", &device), Some("/sp"));
        assert_eq!(redirect_target(DeviceClass::Desktop, "/sp", &device), Some("/"));
        assert_eq!(redirect_target(DeviceClass::Mobile, "/sp", &device), None);
        assert_eq!(redirect_target(DeviceClass::Desktop, "/", &device), None);
        assert_eq!(redirect_target(DeviceClass::Mobile, "/reel", &device), None);
    }

    async fn get(app: axum::Router, uri: &str, ua: Option<&str>) -> axum::response::Response {
        let mut req = Request::builder().uri(uri);
        if let Some(ua) = ua {
            req = req.header(header::USER_AGENT, ua);
        }
        app.oneshot(req.body(Body::empty()).unwrap()).await.unwrap()
    }

    fn location(res: &axum::response::Response) -> &str {
        res.headers().get(header::LOCATION).unwrap().to_str().unwrap()
    }

    #[tokio::test]
    async fn test_mobile_root_redirects() {
        let dir = TempDir::new().unwrap();
        let state = state_for(dir.path());
        let app = routes::router(state.clone());

        let res = get(app, "/", Some(IPHONE)).await;
        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&res), "/sp");
        assert_eq!(state.metrics.mobile_redirects.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn test_redirect_keeps_query() {
        let dir = TempDir::new().unwrap();
        let app = routes::router(state_for(dir.path()));

        let res = get(app, "/?ref=card&x=1", Some(IPHONE)).await;
        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&res), "/sp?ref=card&x=1");
    }

    #[tokio::test]
    async fn test_desktop_mobile_page_redirects() {
        let dir = TempDir::new().unwrap();
        let state = state_for(dir.path());

        let res = get(routes::router(state.clone()), "/sp", Some(DESKTOP)).await;
        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&res), "/");

        // no user agent counts as desktop
        let res = get(routes::router(state.clone()), "/sp", None).await;
        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(state.metrics.desktop_redirects.load(Ordering::Relaxed), 2);
    }

    #[tokio::test]
    async fn test_matching_device_passes_through() {
        let dir = TempDir::new().unwrap();
        let state = state_for(dir.path());

        let res = get(routes::router(state.clone()), "/", Some(DESKTOP)).await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = get(routes::router(state.clone()), "/sp", Some(IPHONE)).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_other_paths_untouched() {
        let dir = TempDir::new().unwrap();
        let state = state_for(dir.path());

        let res = get(routes::router(state.clone()), "/reel", Some(IPHONE)).await;
        assert_eq!(res.status(), StatusCode::OK);
        let res = get(routes::router(state.clone()), "/api/everydays", Some(IPHONE)).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(state.metrics.mobile_redirects.load(Ordering::Relaxed), 0);
    }
}
