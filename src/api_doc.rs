use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{DataEntry, StatsResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-mem-kv API",
        version = "1.0.0",
        description = "An in-memory key-value store exposed over HTTP"
    ),
    paths(
        handlers::create::create_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::delete::delete_handler,
        handlers::stats::stats_handler
    ),
    components(schemas(DataEntry, StatsResponse, ErrorResponse)),
    tags(
        (name = "data", description = "Key-value operations"),
        (name = "stats", description = "Service statistics")
    )
)]
pub struct ApiDoc;
