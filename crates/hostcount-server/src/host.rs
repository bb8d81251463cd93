//! Local host identity resolution.

use hostcount_core::error::{HostCountError, Result};
use hostcount_core::HostId;

/// Resolve the machine host name once at startup.
pub fn resolve_local() -> Result<HostId> {
    let raw = hostname::get()
        .map_err(|e| HostCountError::HostIdentity(format!("gethostname failed: {e}")))?;
    let name = raw
        .into_string()
        .map_err(|raw| HostCountError::HostIdentity(format!("host name is not UTF-8: {raw:?}")))?;
    HostId::new(name)
}
