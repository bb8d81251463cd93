//! HTTP transport for the counter route.

pub mod error;
pub mod http;

pub use error::ApiError;
