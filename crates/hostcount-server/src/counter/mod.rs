//! Per-host request counter.
//!
//! Re-exports the service so handlers and tests can depend on this module
//! directly.

pub mod service;

pub use service::CounterService;
