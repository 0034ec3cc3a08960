//! Device-based routing between the desktop root and the mobile page.
//!
//! Mobile clients asking for the root are sent to the mobile path, desktop
//! clients asking for the mobile path are sent back to the root. Anything
//! else passes through untouched. Classification is a case-insensitive
//! substring match of the `User-Agent` against the configured indicators.

use axum::{
    extract::{Request, State},
    http::header::USER_AGENT,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::config::DeviceConfig;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

/// Classifies a user agent; a missing header counts as desktop.
pub fn classify(user_agent: Option<&str>, indicators: &[String]) -> DeviceClass {
    let Some(ua) = user_agent else {
        return DeviceClass::Desktop;
    };
    let ua = ua.to_lowercase();
    if indicators.iter().any(|needle| ua.contains(&needle.to_lowercase())) {
        DeviceClass::Mobile
    } else {
        DeviceClass::Desktop
    }
}

/// Path the request should be redirected to, if any.
pub fn redirect_target<'a>(class: DeviceClass, path: &str, cfg: &'a DeviceConfig) -> Option<&'a str> {
    match class {
        DeviceClass::Mobile if path == cfg.root_path => Some(cfg.mobile_path.as_str()),
        DeviceClass::Desktop if path == cfg.mobile_path => Some(cfg.root_path.as_str()),
        _ => None,
    }
}

pub async fn device_router_middleware(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let device = &state.config.device;
    let path = req.uri().path();
    // Only the two routed paths need a classification.
    if path != device.root_path && path != device.mobile_path {
        return next.run(req).await;
    }

    let user_agent = req.headers().get(USER_AGENT).and_then(|v| v.to_str().ok());
    let class = classify(user_agent, &device.mobile_indicators);

    if let Some(target) = redirect_target(class, path, device) {
        let location = match req.uri().query() {
            Some(q) => format!("{}?{}", target, q),
            None => target.to_string(),
        };
        match class {
            DeviceClass::Mobile => state.metrics.inc_mobile_redirects(),
            DeviceClass::Desktop => state.metrics.inc_desktop_redirects(),
        }
        tracing::debug!("{:?} client on {} redirected to {}", class, path, location);
        return Redirect::temporary(&location).into_response();
    }

    next.run(req).await
}
