//! Top-level facade crate for hostcount.
//!
//! Re-exports the core types and the server library so users can depend on a single crate.

pub mod core {
    pub use hostcount_core::*;
}

pub mod server {
    pub use hostcount_server::*;
}
