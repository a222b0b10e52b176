use serde::{Deserialize, Serialize};

/// Request and response body for POST /data.
///
/// The create endpoint echoes the stored entry back on success.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DataEntry {
    pub key: String,
    pub value: String,
}

/// Response type for GET /stats
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatsResponse {
    pub requests: i64,
    pub keys: usize,
    #[serde(rename = "uptimeSeconds")]
    pub uptime_seconds: i64,
}
