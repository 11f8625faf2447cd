//! # pagekit
//!
//! Client-side helpers for consuming paginated REST APIs.
//!
//! The first page of a collection endpoint reveals the total record count;
//! [`BatchFetcher`] uses it to fan out concurrent requests for every
//! remaining page and hands back the full record sequence in one call.
//!
//! ## Features
//!
//! - **Batched Pagination**: one sequential request to learn the count, then
//!   concurrent fetches for pages 2..N joined as a batch
//! - **Injected Transport**: the HTTP client is a trait, so the fetcher
//!   tests against fakes and never reaches for global state
//! - **Opaque Records**: records are a generic parameter; the fetcher never
//!   inspects what it fetches
//! - **Normalized Errors**: every request failure surfaces as one uniform
//!   error shape carrying the failing response's body
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagekit::{BatchFetcher, HttpTransport, HttpTransportConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = HttpTransportConfig::builder()
//!         .base_url("https://api.example.com")
//!         .header("X-Api-Key", "secret")
//!         .build();
//!
//!     let fetcher = BatchFetcher::new(HttpTransport::with_config(config));
//!     let records: Vec<serde_json::Value> = fetcher.fetch_all("/v1/records", None).await?;
//!
//!     println!("{} records", records.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Transport capability and the reqwest-backed implementation
pub mod transport;

/// Batched collection fetching
pub mod batch;

pub use batch::{err_handler, format_response, BatchFetcher, DEFAULT_PAGE_LIMIT};
pub use error::{Error, Result};
pub use transport::{HttpTransport, HttpTransportConfig, Transport};
pub use types::{CollectionPage, Filter, PageQuery, Response};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
