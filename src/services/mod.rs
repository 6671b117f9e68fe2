pub mod basic_auth_service;
pub mod user_source_service;
pub mod users_page_service;
