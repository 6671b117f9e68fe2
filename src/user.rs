// src/user.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::services::user_source_service::SourceError;

/// One row of the user table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// Where the full, ordered user list comes from. Called once per page load.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, SourceError>;

    fn name(&self) -> &'static str;
}
