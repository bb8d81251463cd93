//! Service config loader (environment only).
//!
//! `REDIS_HOST` is the single recognized variable. Everything else is fixed.

pub mod schema;

use hostcount_core::error::Result;

pub use schema::{ServiceConfig, StoreConfig, DEFAULT_REDIS_HOST, DEFAULT_REDIS_PORT, LISTEN_ADDR, REDIS_HOST_VAR};

/// Read the process environment once.
pub fn from_env() -> Result<ServiceConfig> {
    from_lookup(|name| std::env::var(name).ok())
}

/// Build config from an arbitrary variable lookup (tests pass a map).
pub fn from_lookup<F>(lookup: F) -> Result<ServiceConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = ServiceConfig::default();

    if let Some(host) = lookup(REDIS_HOST_VAR) {
        let host = host.trim();
        if !host.is_empty() {
            cfg.store.host = host.to_string();
        }
    }

    cfg.validate()?;
    Ok(cfg)
}
