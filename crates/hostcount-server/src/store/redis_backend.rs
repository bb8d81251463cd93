//! Redis backend.
//!
//! Connects lazily and keeps a single multiplexed connection shared by all
//! requests. A command that fails with a connectivity error drops the cached
//! connection so the next call reconnects; the failing call itself is not
//! retried. Each installed connection carries a generation number, and a
//! failure only evicts the connection it ran on, never one a concurrent
//! request has already re-established. No command or connect timeout is
//! applied.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, ConnectionAddr, ConnectionInfo, RedisConnectionInfo, RedisError, RedisResult};
use tokio::sync::Mutex;

use hostcount_core::error::{HostCountError, Result};

use super::CounterStore;
use crate::config::StoreConfig;

/// Cached connection tagged with the generation it was installed under.
struct ConnSlot<C> {
    generation: u64,
    conn: Option<C>,
}

impl<C: Clone> ConnSlot<C> {
    fn new() -> Self {
        Self {
            generation: 0,
            conn: None,
        }
    }

    fn current(&self) -> Option<(u64, C)> {
        self.conn.as_ref().map(|c| (self.generation, c.clone()))
    }

    fn install(&mut self, conn: C) -> u64 {
        self.generation += 1;
        self.conn = Some(conn);
        self.generation
    }

    /// Drop the cached connection if it is still the one from `generation`.
    fn evict(&mut self, generation: u64) -> bool {
        if self.generation == generation && self.conn.is_some() {
            self.conn = None;
            true
        } else {
            false
        }
    }
}

pub struct RedisStore {
    client: redis::Client,
    slot: Mutex<ConnSlot<MultiplexedConnection>>,
    addr: String,
}

impl RedisStore {
    /// Build the client. Does not touch the network.
    pub fn new(cfg: &StoreConfig) -> Result<Self> {
        let info = ConnectionInfo {
            addr: ConnectionAddr::Tcp(cfg.host.clone(), cfg.port),
            redis: RedisConnectionInfo {
                db: cfg.db,
                ..Default::default()
            },
        };
        let client = redis::Client::open(info)
            .map_err(|e| HostCountError::Config(format!("redis client for {}: {e}", cfg.addr())))?;

        Ok(Self {
            client,
            slot: Mutex::new(ConnSlot::new()),
            addr: cfg.addr(),
        })
    }

    async fn connection(&self) -> Result<(u64, MultiplexedConnection)> {
        let mut slot = self.slot.lock().await;
        if let Some(current) = slot.current() {
            return Ok(current);
        }

        let conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| {
                tracing::warn!(addr = %self.addr, error = %e, "redis connect failed");
                classify("connect", &e)
            })?;
        let generation = slot.install(conn.clone());
        tracing::debug!(addr = %self.addr, generation, "redis connected");
        Ok((generation, conn))
    }

    async fn settle<T>(&self, op: &'static str, generation: u64, res: RedisResult<T>) -> Result<T> {
        match res {
            Ok(v) => Ok(v),
            Err(e) => {
                let err = classify(op, &e);
                tracing::warn!(op, addr = %self.addr, error = %e, "redis command failed");
                if err.is_connectivity() && self.slot.lock().await.evict(generation) {
                    tracing::debug!(addr = %self.addr, generation, "redis connection dropped");
                }
                Err(err)
            }
        }
    }
}

fn classify(op: &str, e: &RedisError) -> HostCountError {
    if e.is_io_error() || e.is_connection_refusal() || e.is_connection_dropped() || e.is_timeout() {
        HostCountError::StoreUnavailable(format!("{op}: {e}"))
    } else {
        HostCountError::Store(format!("{op}: {e}"))
    }
}

#[async_trait]
impl CounterStore for RedisStore {
    fn backend(&self) -> &'static str {
        "redis"
    }

    async fn increment(&self, key: &str) -> Result<i64> {
        let (generation, mut conn) = self.connection().await?;
        let res: RedisResult<i64> = conn.incr(key, 1i64).await;
        self.settle("incr", generation, res).await
    }

    async fn get(&self, key: &[u8]) -> Result<Option<String>> {
        let (generation, mut conn) = self.connection().await?;
        let res: RedisResult<Option<Vec<u8>>> = conn.get(key).await;
        let raw = self.settle("get", generation, res).await?;
        Ok(raw.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    async fn list_keys(&self) -> Result<Vec<Vec<u8>>> {
        let (generation, mut conn) = self.connection().await?;
        let res: RedisResult<Vec<Vec<u8>>> = conn.keys("*").await;
        self.settle("keys", generation, res).await
    }

    async fn ping(&self) -> Result<()> {
        let (generation, mut conn) = self.connection().await?;
        let res: RedisResult<String> = redis::cmd("PING").query_async(&mut conn).await;
        self.settle("ping", generation, res).await.map(|_| ())
    }
}
