use axum::{
    extract::Request,
    http::{header::ALLOW, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::AppError;

/// Rejects requests the read-only site never serves.
///
/// - Path traversal attempts in the URI (raw or percent-encoded): `400`.
/// - Methods other than `GET` and `HEAD`: `405`.
pub async fn validate_request_middleware(req: Request, next: Next) -> Response {
    let uri_path = req.uri().path();
    if contains_path_traversal(uri_path) {
        tracing::warn!("Rejected traversal attempt: {}", sanitize_for_logging(uri_path));
        return AppError::BadRequest("Path traversal detected in request".to_string()).into_response();
    }

    if !matches!(req.method(), &Method::GET | &Method::HEAD) {
        let mut res = (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(json!({
                "error": {
                    "code": "METHOD_NOT_ALLOWED",
                    "message": format!("Method {} is not supported", req.method()),
                },
                "status": 405,
            })),
        )
            .into_response();
        res.headers_mut().insert(ALLOW, HeaderValue::from_static("GET, HEAD"));
        return res;
    }

    next.run(req).await
}

/// Detects directory traversal sequences, including encoded variants.
pub fn contains_path_traversal(path: &str) -> bool {
    let lower = path.to_lowercase();

    // whole `..` segments only; `..draft.png` is a valid file name
    if path.split(['/', '\\']).any(|segment| segment == "..") {
        return true;
    }
    if path.contains("/./") || path.contains("\\.\\") {
        return true;
    }
    // bypass attempt: ....
    if path.contains("....") {
        return true;
    }

    // single and double encoding
    let encoded_patterns = [
        "%2e%2e",
        "%252e%252e",
        "%2e/",
        "%252e%2f",
        "/%2e",
        "%2f%2e",
        "%2e\\",
        "%2e%5c",
        "%5c%2e",
        "%5c%5c",
        "%00",
    ];
    if encoded_patterns.iter().any(|p| lower.contains(p)) {
        return true;
    }

    path.contains('\0')
}

/// Strips control characters and bounds the length of untrusted input before logging.
pub fn sanitize_for_logging(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .take(200)
        .collect::<String>()
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
}
