pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod stats;

pub use create::create_handler;
pub use delete::delete_handler;
pub use get::get_handler;
pub use list::list_handler;
pub use stats::stats_handler;
