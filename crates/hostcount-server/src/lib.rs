//! hostcount server library entry.
//!
//! This crate wires the store backends, the counter service, the HTTP
//! transport and the operational endpoints into one axum application. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod counter;
pub mod host;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
pub mod transport;
