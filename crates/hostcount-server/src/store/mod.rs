//! Counter store abstraction.
//!
//! The store owns every counter; the service only talks to it through
//! `CounterStore`. `RedisStore` is the production backend, `MemoryStore` is
//! an in-process stand-in for tests and local runs.

pub mod memory;
pub mod redis_backend;

use async_trait::async_trait;

use hostcount_core::error::Result;

pub use self::memory::MemoryStore;
pub use self::redis_backend::RedisStore;

/// Narrow client interface over the shared key-value store.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    /// Atomically add 1 to `key`, creating it at 1. Returns the new value.
    async fn increment(&self, key: &str) -> Result<i64>;

    /// Current value of `key`, `None` if the key does not exist. Values are
    /// decoded lossily.
    async fn get(&self, key: &[u8]) -> Result<Option<String>>;

    /// Every key in the store as raw bytes, in the store's own order. Keys
    /// written by other clients need not be UTF-8.
    async fn list_keys(&self) -> Result<Vec<Vec<u8>>>;

    /// Round-trip check used by readiness probes.
    async fn ping(&self) -> Result<()>;
}
