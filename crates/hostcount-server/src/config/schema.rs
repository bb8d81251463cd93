use hostcount_core::error::{HostCountError, Result};

/// Environment variable naming the store host.
pub const REDIS_HOST_VAR: &str = "REDIS_HOST";
pub const DEFAULT_REDIS_HOST: &str = "127.0.0.1";
pub const DEFAULT_REDIS_PORT: u16 = 6379;

/// Fixed listen address of the HTTP server.
pub const LISTEN_ADDR: &str = "0.0.0.0:4567";

#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    pub store: StoreConfig,
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        self.store.validate()
    }
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub db: i64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_REDIS_HOST.into(),
            port: DEFAULT_REDIS_PORT,
            db: 0,
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(HostCountError::Config("store host must not be empty".into()));
        }
        if self.host.chars().any(char::is_whitespace) {
            return Err(HostCountError::Config(format!(
                "{REDIS_HOST_VAR} must not contain whitespace: {:?}",
                self.host
            )));
        }
        if self.port == 0 {
            return Err(HostCountError::Config("store port must be non-zero".into()));
        }
        Ok(())
    }

    /// `host:port` for logs (IPv6 literals are bracketed).
    pub fn addr(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}
