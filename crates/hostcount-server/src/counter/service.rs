use std::sync::Arc;

use hostcount_core::error::{HostCountError, Result};
use hostcount_core::{HostId, Snapshot, SnapshotEntry};

use crate::obs::ServiceMetrics;
use crate::store::CounterStore;

/// Increments this host's counter and dumps every counter in the store.
///
/// Holds no locks: increment atomicity comes from the store, and the listing
/// is taken without synchronizing with concurrent increments, so a snapshot
/// may mix before/after values across keys.
pub struct CounterService {
    store: Arc<dyn CounterStore>,
    host: HostId,
    metrics: Arc<ServiceMetrics>,
}

impl CounterService {
    pub fn new(store: Arc<dyn CounterStore>, host: HostId, metrics: Arc<ServiceMetrics>) -> Self {
        Self { store, host, metrics }
    }

    pub fn host(&self) -> &HostId {
        &self.host
    }

    /// Add 1 to this host's counter. Returns the new value.
    pub async fn increment(&self) -> Result<i64> {
        let n = self
            .store
            .increment(self.host.as_str())
            .await
            .map_err(|e| self.store_failed("incr", e))?;
        tracing::debug!(host = %self.host, count = n, "counter incremented");
        Ok(n)
    }

    /// Read every key and its value. A key that vanishes between listing and
    /// fetch keeps its place with no value. Keys are fetched by their raw
    /// bytes and only decoded (lossily) for display.
    pub async fn snapshot(&self) -> Result<Snapshot> {
        let keys = self
            .store
            .list_keys()
            .await
            .map_err(|e| self.store_failed("keys", e))?;

        let mut snap = Snapshot::new();
        for key in keys {
            let value = self
                .store
                .get(&key)
                .await
                .map_err(|e| self.store_failed("get", e))?;
            let key = String::from_utf8_lossy(&key).into_owned();
            if value.is_none() {
                tracing::debug!(key = %key, "key vanished before fetch");
            }
            snap.push(SnapshotEntry::new(key, value));
        }
        Ok(snap)
    }

    /// One request: increment, then snapshot.
    pub async fn handle(&self) -> Result<Snapshot> {
        self.increment().await?;
        self.snapshot().await
    }

    fn store_failed(&self, op: &'static str, e: HostCountError) -> HostCountError {
        self.metrics.store_errors.inc(&[("op", op)]);
        e
    }
}
