use async_trait::async_trait;
use dashmap::DashMap;

use hostcount_core::error::{HostCountError, Result};

use super::CounterStore;

/// In-memory store with Redis-like binary keys and string values.
#[derive(Default)]
pub struct MemoryStore {
    values: DashMap<Vec<u8>, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            values: DashMap::new(),
        }
    }

    /// Seed the store, e.g. with counters from other hosts.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Vec<u8>>,
        V: Into<String>,
    {
        let this = Self::new();
        for (k, v) in entries {
            this.values.insert(k.into(), v.into());
        }
        this
    }

    pub fn insert(&self, key: impl Into<Vec<u8>>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn increment(&self, key: &str) -> Result<i64> {
        // entry() holds the shard lock, so read-modify-write is atomic per key.
        let mut slot = self
            .values
            .entry(key.as_bytes().to_vec())
            .or_insert_with(|| "0".to_string());
        let current: i64 = slot.parse().map_err(|_| {
            HostCountError::Store(format!("incr: value of {key} is not an integer"))
        })?;
        let next = current
            .checked_add(1)
            .ok_or_else(|| HostCountError::Store(format!("incr: {key} would overflow")))?;
        *slot = next.to_string();
        Ok(next)
    }

    async fn get(&self, key: &[u8]) -> Result<Option<String>> {
        Ok(self.values.get(key).map(|v| v.value().clone()))
    }

    async fn list_keys(&self) -> Result<Vec<Vec<u8>>> {
        Ok(self.values.iter().map(|e| e.key().clone()).collect())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
