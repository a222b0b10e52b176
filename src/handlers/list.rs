use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State};
use std::collections::HashMap;

/// GET /data handler - Full snapshot of the store
///
/// Returns every entry as one JSON object. The snapshot is an independent
/// copy, so serialization happens outside the store's lock.
#[utoipa::path(
    get,
    path = routes::DATA,
    responses(
        (status = 200, description = "All entries as a JSON object", body = HashMap<String, String>)
    ),
    tag = "data"
)]
pub async fn list_handler(State(state): State<AppState>) -> Json<HashMap<String, String>> {
    let snapshot = state.store.snapshot();
    tracing::debug!("Snapshot of {} entries", snapshot.len());
    Json(snapshot)
}
