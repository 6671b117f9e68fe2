// src/config.rs
use std::sync::OnceLock;

use anyhow::{anyhow, Result};

use crate::utils::constants::DEFAULT_PAGE_SIZE;

pub static PAGE_SIZE: OnceLock<usize> = OnceLock::new();

/// Fixes the page size for the lifetime of the process.
pub fn set_page_size(page_size: usize) -> Result<()> {
    if page_size == 0 {
        return Err(anyhow!("Page size must be > 0"));
    }
    PAGE_SIZE
        .set(page_size)
        .map_err(|_| anyhow!("Page size already set"))
}

pub fn get_page_size() -> usize {
    PAGE_SIZE.get().copied().unwrap_or(DEFAULT_PAGE_SIZE)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuthConfig {
    pub username: String,
    pub password: String,
}

impl BasicAuthConfig {
    /// Parses `user:password`. The password may itself contain `:`.
    pub fn parse(raw: &str) -> Result<Self> {
        let (username, password) = raw
            .split_once(':')
            .ok_or_else(|| anyhow!("Basic auth must look like user:password"))?;
        if username.is_empty() {
            return Err(anyhow!("Basic auth username is empty"));
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

pub static BASIC_AUTH: OnceLock<Option<BasicAuthConfig>> = OnceLock::new();

pub fn set_basic_auth(auth: Option<BasicAuthConfig>) {
    let _ = BASIC_AUTH.set(auth);
}

pub fn get_basic_auth() -> Option<&'static BasicAuthConfig> {
    BASIC_AUTH.get().and_then(|opt| opt.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_auth() {
        let cfg = BasicAuthConfig::parse("admin:s3:cret").unwrap();
        assert_eq!(cfg.username, "admin");
        assert_eq!(cfg.password, "s3:cret");

        assert!(BasicAuthConfig::parse("nocolon").is_err());
        assert!(BasicAuthConfig::parse(":pw").is_err());
    }

    #[test]
    fn test_page_size_rejects_zero() {
        assert!(set_page_size(0).is_err());
    }
}
