use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use std::collections::HashMap;

/// GET /data/{key} handler - Retrieve a single entry
#[utoipa::path(
    get,
    path = routes::DATA_ITEM,
    params(
        ("key" = String, Path, description = "Key of the entry")
    ),
    responses(
        (status = 200, description = "Entry found, returned as {key: value}", body = HashMap<String, String>),
        (status = 404, description = "Key not found", body = ErrorResponse)
    ),
    tag = "data"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<HashMap<String, String>>, ApiError> {
    match state.store.get(&key) {
        Some(value) => {
            tracing::debug!("Retrieved entry for key: {}", key);
            Ok(Json(HashMap::from([(key, value)])))
        }
        None => {
            tracing::debug!("Entry not found for key: {}", key);
            Err(ApiError::KeyNotFound(key))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use tower::ServiceExt;

    fn setup_test_app() -> (Router, AppState) {
        let state = AppState::new();
        let app = Router::new()
            .route(crate::routes::DATA_ITEM, get(get_handler))
            .with_state(state.clone());
        (app, state)
    }

    #[tokio::test]
    async fn test_get_existing_key() {
        let (app, state) = setup_test_app();
        state.store.set("x".to_string(), "y".to_string());

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/data/x")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let entry: HashMap<String, String> = serde_json::from_slice(&body).unwrap();
        assert_eq!(entry.len(), 1);
        assert_eq!(entry.get("x"), Some(&"y".to_string()));
    }

    #[tokio::test]
    async fn test_get_missing_key_returns_404() {
        let (app, _state) = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/data/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error.error.contains("Key not found"));
        assert!(error.error.contains("missing"));
    }
}
