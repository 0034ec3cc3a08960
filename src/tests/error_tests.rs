#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use http_body_util::BodyExt;
    use serde_json::Value;

    use crate::error::{AppError, AppResult, OptionExt};

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let res = err.into_response();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let (status, json) = body_json(AppError::NotFound("Category 'x' not found".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "Category 'x' not found");
        assert_eq!(json["status"], 404);
        assert!(json["timestamp"].is_string());
        assert!(json["error"].get("details").is_none());
    }

    #[tokio::test]
    async fn test_bad_request_response() {
        let (status, json) = body_json(AppError::BadRequest("nope".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_validation_error_response() {
        let err = AppError::ValidationError { field: "variant".to_string(), message: "bad".to_string() };
        let (status, json) = body_json(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["details"]["field"], "variant");
        assert_eq!(json["error"]["details"]["message"], "bad");
    }

    #[tokio::test]
    async fn test_panicked_blocking_task_is_internal_error() {
        let join_err = tokio::task::spawn_blocking(|| -> bool { panic!("disk on fire") }).await.unwrap_err();
        let err = AppError::from(join_err);
        assert!(matches!(err, AppError::Internal(_)));
        assert!(err.to_string().contains("blocking filesystem task failed"));

        let (status, json) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
        assert!(!json.to_string().contains("disk on fire"));
        assert!(json["error"]["details"]["error_id"].is_string());
    }

    #[tokio::test]
    async fn test_service_unavailable_response() {
        let (status, json) = body_json(AppError::ServiceUnavailable("warming up".to_string())).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["status"], 503);
    }

    #[test]
    fn test_display() {
        assert_eq!(AppError::NotFound("x".to_string()).to_string(), "Not found: x");
        let err = AppError::ValidationError { field: "f".to_string(), message: "m".to_string() };
        assert_eq!(err.to_string(), "Validation error on field 'f': m");
    }

    #[test]
    fn test_option_ext() {
        let found: AppResult<u8> = Some(1).ok_or_not_found("Thing");
        assert_eq!(found.unwrap(), 1);

        let missing: AppResult<u8> = None.ok_or_not_found("Category 'x'");
        match missing {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "Category 'x' not found"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
