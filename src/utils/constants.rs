// src/utils/constants.rs

// ---------------------------------------------------------
// Pagination
// ---------------------------------------------------------
pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

// Below this page the window lists the first pages with no ellipsis.
pub const LOW_MODE_LIMIT: usize = 10;
// Pages shown on each side of the current page in high mode.
pub const WINDOW_RADIUS: usize = 2;

// ---------------------------------------------------------
// Server
// ---------------------------------------------------------
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_USERS_FILE: &str = "data/users.json";
