//! Runtime configuration read from the environment.
//!
//! - `CHECKLIST_DATABASE_URL`: SQLite URL (default `sqlite:checklists.db`)
//! - `CHECKLIST_BIND_ADDR`: listen address (default `127.0.0.1:3000`)
//! - `CHECKLIST_CORS_ORIGIN`: allowed browser origin (default `http://localhost:8080`)

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;

pub const DATABASE_URL_VAR: &str = "CHECKLIST_DATABASE_URL";
pub const BIND_ADDR_VAR: &str = "CHECKLIST_BIND_ADDR";
pub const CORS_ORIGIN_VAR: &str = "CHECKLIST_CORS_ORIGIN";

const DEFAULT_DATABASE_URL: &str = "sqlite:checklists.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let value = |name: &str, default: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_addr = value(BIND_ADDR_VAR, DEFAULT_BIND_ADDR);
        let cors_origin = value(CORS_ORIGIN_VAR, DEFAULT_CORS_ORIGIN);

        Ok(Self {
            database_url: value(DATABASE_URL_VAR, DEFAULT_DATABASE_URL),
            bind_addr: bind_addr
                .parse()
                .with_context(|| format!("Invalid {}: {}", BIND_ADDR_VAR, bind_addr))?,
            cors_origin: cors_origin
                .parse()
                .with_context(|| format!("Invalid {}: {}", CORS_ORIGIN_VAR, cors_origin))?,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cors_origin: HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
        }
    }
}
