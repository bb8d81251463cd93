//! Store fakes shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub mod resp;

use async_trait::async_trait;

use hostcount_core::error::{HostCountError, Result};
use hostcount_core::HostId;
use hostcount_server::app_state::AppState;
use hostcount_server::config::ServiceConfig;
use hostcount_server::store::{CounterStore, MemoryStore};

pub const HOST: &str = "web-1";

pub fn host() -> HostId {
    HostId::new(HOST).expect("valid host id")
}

pub fn state_with(store: Arc<dyn CounterStore>) -> AppState {
    AppState::new(ServiceConfig::default(), store, host())
}

/// Every call fails as if the store were down. Counts how often it was hit.
#[derive(Default)]
pub struct UnreachableStore {
    pub calls: AtomicUsize,
}

impl UnreachableStore {
    fn fail<T>(&self, op: &str) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(HostCountError::StoreUnavailable(format!("{op}: connection refused")))
    }
}

#[async_trait]
impl CounterStore for UnreachableStore {
    fn backend(&self) -> &'static str {
        "unreachable"
    }
    async fn increment(&self, _key: &str) -> Result<i64> {
        self.fail("incr")
    }
    async fn get(&self, _key: &[u8]) -> Result<Option<String>> {
        self.fail("get")
    }
    async fn list_keys(&self) -> Result<Vec<Vec<u8>>> {
        self.fail("keys")
    }
    async fn ping(&self) -> Result<()> {
        self.fail("ping")
    }
}

/// Lists one extra key that is already gone by the time it is fetched.
pub struct VanishingKeyStore {
    pub inner: MemoryStore,
    pub ghost: String,
}

#[async_trait]
impl CounterStore for VanishingKeyStore {
    fn backend(&self) -> &'static str {
        "vanishing"
    }
    async fn increment(&self, key: &str) -> Result<i64> {
        self.inner.increment(key).await
    }
    async fn get(&self, key: &[u8]) -> Result<Option<String>> {
        self.inner.get(key).await
    }
    async fn list_keys(&self) -> Result<Vec<Vec<u8>>> {
        let mut keys = vec![self.ghost.clone().into_bytes()];
        keys.extend(self.inner.list_keys().await?);
        Ok(keys)
    }
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
