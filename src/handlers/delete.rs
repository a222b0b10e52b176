use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};

/// DELETE /data/{key} handler - Remove an entry
#[utoipa::path(
    delete,
    path = routes::DATA_ITEM,
    params(
        ("key" = String, Path, description = "Key of the entry")
    ),
    responses(
        (status = 200, description = "Entry removed"),
        (status = 404, description = "Key not found", body = ErrorResponse)
    ),
    tag = "data"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete(&key) {
        tracing::info!("Deleted entry for key: {}", key);
        Ok(StatusCode::OK)
    } else {
        tracing::debug!("Delete of absent key: {}", key);
        Err(ApiError::KeyNotFound(key))
    }
}
