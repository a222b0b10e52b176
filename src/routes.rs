// Route path constants - single source of truth for all API paths

pub const DATA: &str = "/data";
pub const DATA_ITEM: &str = "/data/{key}";
pub const STATS: &str = "/stats";
