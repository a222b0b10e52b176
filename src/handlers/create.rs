use crate::error::{ApiError, ErrorResponse};
use crate::models::DataEntry;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

/// POST /data handler - Create or overwrite an entry
///
/// Both key and value must be non-empty; the store is not touched
/// otherwise. Taking the Json extractor as a Result lets malformed bodies
/// surface as our 400 instead of axum's default rejection.
#[utoipa::path(
    post,
    path = routes::DATA,
    request_body = DataEntry,
    responses(
        (status = 201, description = "Entry stored", body = DataEntry),
        (status = 400, description = "Malformed body or empty key/value", body = ErrorResponse)
    ),
    tag = "data"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<DataEntry>, JsonRejection>,
) -> Result<(StatusCode, Json<DataEntry>), ApiError> {
    let Json(entry) = payload?;

    if entry.key.is_empty() || entry.value.is_empty() {
        return Err(ApiError::InvalidPayload(
            "key and value must be non-empty".to_string(),
        ));
    }

    state.store.set(entry.key.clone(), entry.value.clone());

    tracing::info!("Stored entry for key: {}", entry.key);
    Ok((StatusCode::CREATED, Json(entry)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::post};
    use tower::ServiceExt;

    fn setup_test_app() -> (Router, AppState) {
        let state = AppState::new();
        let app = Router::new()
            .route(crate::routes::DATA, post(create_handler))
            .with_state(state.clone());
        (app, state)
    }

    fn post_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/data")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_success_echoes_entry() {
        let (app, state) = setup_test_app();

        let response = app
            .oneshot(post_request(r#"{"key":"x","value":"y"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let echoed: DataEntry = serde_json::from_slice(&body).unwrap();
        assert_eq!(echoed.key, "x");
        assert_eq!(echoed.value, "y");

        assert_eq!(state.store.get(&"x".to_string()), Some("y".to_string()));
    }

    #[tokio::test]
    async fn test_create_overwrites_existing_key() {
        let (app, state) = setup_test_app();
        state.store.set("x".to_string(), "old".to_string());

        let response = app
            .oneshot(post_request(r#"{"key":"x","value":"new"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(state.store.get(&"x".to_string()), Some("new".to_string()));
        assert_eq!(state.store.len(), 1);
    }

    #[tokio::test]
    async fn test_create_empty_key_rejected() {
        let (app, state) = setup_test_app();

        let response = app
            .oneshot(post_request(r#"{"key":"","value":"y"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.store.is_empty());
    }

    #[tokio::test]
    async fn test_create_empty_value_rejected() {
        let (app, state) = setup_test_app();

        let response = app
            .oneshot(post_request(r#"{"key":"x","value":""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.store.is_empty());
    }

    #[tokio::test]
    async fn test_create_malformed_json_rejected() {
        let (app, state) = setup_test_app();

        let response = app.oneshot(post_request("{not json}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.store.is_empty());
    }

    #[tokio::test]
    async fn test_create_missing_field_rejected() {
        let (app, state) = setup_test_app();

        let response = app.oneshot(post_request(r#"{"key":"x"}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.store.is_empty());

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error.error.contains("Invalid payload"));
    }
}
