//! hostcount core: error surface, host identity and snapshot model.
//!
//! This crate holds the types shared by the server and any tooling that wants
//! to read or render counter snapshots. It carries no transport, store or
//! runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Fallible paths surface as `HostCountError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod host;
pub mod snapshot;

/// Shared result type.
pub use error::{ClientCode, HostCountError, Result};
pub use host::HostId;
pub use snapshot::{Snapshot, SnapshotEntry};
