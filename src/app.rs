use axum::{
    Json, Router,
    http::StatusCode,
    middleware as axum_mw,
    routing::{get, post},
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::error::ErrorResponse;
use crate::handlers;
use crate::middleware::count_requests;
use crate::routes;
use crate::state::AppState;

/// Build the complete axum application:
/// - /data, /data/{key}  (key/value operations)
/// - /stats              (request/key counts and uptime)
/// - /docs               (Swagger UI)
///
/// The counting middleware wraps every route above, including the 404
/// fallback, so each inbound request is counted exactly once.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route(
            routes::DATA,
            post(handlers::create_handler).get(handlers::list_handler),
        )
        .route(
            routes::DATA_ITEM,
            get(handlers::get_handler).delete(handlers::delete_handler),
        )
        .route(routes::STATS, get(handlers::stats_handler))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(fallback_handler)
        .with_state(state.clone())
        .layer(axum_mw::from_fn_with_state(state, count_requests))
        // Logging middleware
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Any unmatched method/path combination gets a JSON 404.
async fn fallback_handler() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "not found".to_string(),
        }),
    )
}
