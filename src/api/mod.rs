//! HTTP abstraction layer
//!
//! Provides a trait-based abstraction over the HTTP transport for testability.

pub mod client;
pub mod traits;

pub use client::UreqTransport;
pub use traits::{ApiResponse, HttpTransport};
