use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Increments the request counter exactly once per inbound request,
/// before dispatch, regardless of route or outcome. Requests that end in
/// the 404 fallback are counted too.
pub async fn count_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    state.stats.increment();
    next.run(request).await
}
