//! Shared application state.
//!
//! Built once at startup from `ServiceConfig` and the resolved host identity,
//! then cloned into every handler.

use std::sync::Arc;

use hostcount_core::error::Result;
use hostcount_core::HostId;

use crate::config::ServiceConfig;
use crate::counter::CounterService;
use crate::obs::ServiceMetrics;
use crate::store::{CounterStore, RedisStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    store: Arc<dyn CounterStore>,
    counter: CounterService,
    metrics: Arc<ServiceMetrics>,
}

impl AppState {
    /// Wire state around an already-built store (tests inject a fake here).
    pub fn new(cfg: ServiceConfig, store: Arc<dyn CounterStore>, host: HostId) -> Self {
        let metrics = Arc::new(ServiceMetrics::default());
        let counter = CounterService::new(Arc::clone(&store), host, Arc::clone(&metrics));
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store,
                counter,
                metrics,
            }),
        }
    }

    /// Build the Redis-backed state. Does not connect; the first request does.
    pub fn connect(cfg: ServiceConfig, host: HostId) -> Result<Self> {
        let store: Arc<dyn CounterStore> = Arc::new(RedisStore::new(&cfg.store)?);
        Ok(Self::new(cfg, store, host))
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> Arc<dyn CounterStore> {
        Arc::clone(&self.inner.store)
    }

    pub fn counter(&self) -> &CounterService {
        &self.inner.counter
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.inner.metrics
    }

    pub fn set_draining(&self) {
        self.inner.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }
}
