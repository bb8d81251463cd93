//! Host identity used as the counter key.

use std::fmt;

use crate::error::{HostCountError, Result};

/// Identifier of the serving host inside the shared store namespace.
///
/// Resolved once per process. The only constraint is that it is non-empty;
/// any other string the OS reports as the host name is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostId(String);

impl HostId {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(HostCountError::HostIdentity("host name is empty".into()));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HostId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
