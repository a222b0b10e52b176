use crate::models::StatsResponse;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State};

/// GET /stats handler - Service statistics
///
/// The request count includes the /stats call itself, since the counting
/// middleware runs before dispatch.
#[utoipa::path(
    get,
    path = routes::STATS,
    responses(
        (status = 200, description = "Current request/key counts and uptime", body = StatsResponse)
    ),
    tag = "stats"
)]
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        requests: state.stats.request_count(),
        keys: state.store.len(),
        uptime_seconds: state.stats.uptime_seconds(),
    })
}
