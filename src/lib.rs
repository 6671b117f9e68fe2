pub mod config;
pub mod routes;
pub mod services;
pub mod user;
pub mod utils;

pub use user::{UserRecord, UserSource};
pub use utils::pagination::{build_window, slice, total_pages, PageDirective};
