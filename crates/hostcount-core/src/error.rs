//! Shared error type across hostcount crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Store could not be reached.
    StoreUnavailable,
    /// Store answered with an error reply.
    StoreError,
    /// Local host identity could not be resolved.
    HostIdentity,
    /// Invalid startup configuration.
    BadConfig,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::StoreUnavailable => "STORE_UNAVAILABLE",
            ClientCode::StoreError => "STORE_ERROR",
            ClientCode::HostIdentity => "HOST_IDENTITY",
            ClientCode::BadConfig => "BAD_CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, HostCountError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum HostCountError {
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("store error: {0}")]
    Store(String),
    #[error("host identity: {0}")]
    HostIdentity(String),
    #[error("bad config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl HostCountError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            HostCountError::StoreUnavailable(_) => ClientCode::StoreUnavailable,
            HostCountError::Store(_) => ClientCode::StoreError,
            HostCountError::HostIdentity(_) => ClientCode::HostIdentity,
            HostCountError::Config(_) => ClientCode::BadConfig,
            HostCountError::Internal(_) => ClientCode::Internal,
        }
    }

    /// True for failures caused by losing the store connection.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, HostCountError::StoreUnavailable(_))
    }
}
