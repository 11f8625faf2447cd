//! Transport capability
//!
//! The batch fetcher never talks to the network directly: it is handed a
//! [`Transport`] and issues page requests through it. [`HttpTransport`] is
//! the production implementation backed by `reqwest`; tests inject fakes.

mod client;

pub use client::{HttpTransport, HttpTransportConfig, HttpTransportConfigBuilder};

use crate::error::Result;
use crate::types::{PageQuery, Response};
use async_trait::async_trait;

/// Minimal request interface the fetcher depends on.
///
/// Implementations own URL building, authentication headers, and body
/// decoding. A non-2xx status is not an `Err`: it comes back as a failed
/// [`Response`] for the caller to normalize. `Err` is reserved for failures
/// that never produced a response at all.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request for one page of a collection
    async fn get(&self, path: &str, query: &PageQuery) -> Result<Response>;
}
