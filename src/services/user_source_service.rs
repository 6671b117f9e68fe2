// src/services/user_source_service.rs
use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::user::{UserRecord, UserSource};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("user source answered with status {0}")]
    Status(u16),

    #[error("failed to read users file: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode user records: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl SourceError {
    /// HTTP status reported to the page when loading fails. Anything that
    /// is not an error status becomes 500.
    pub fn status_code(&self) -> u16 {
        match self {
            SourceError::Status(code @ 400..=599) => *code,
            SourceError::Status(_) | SourceError::Io { .. } | SourceError::Decode { .. } => 500,
        }
    }
}

/// Reads a JSON array of user records from disk on every page load.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl UserSource for JsonFileSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, SourceError> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        serde_json::from_slice(&raw).map_err(|source| SourceError::Decode { source })
    }

    fn name(&self) -> &'static str {
        "json-file"
    }
}

/// Fixed in-memory list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    users: Vec<UserRecord>,
}

impl StaticSource {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserSource for StaticSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, SourceError> {
        Ok(self.users.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
