//! Batched collection fetching
//!
//! The core of the crate: [`BatchFetcher`] reads the first page of a
//! collection endpoint, learns the total count, and fans out concurrent
//! requests for the remaining pages. [`format_response`] and [`err_handler`]
//! are the payload-extraction and error-normalization helpers it is built
//! from, exposed for callers issuing their own requests.

mod fetcher;

pub use fetcher::{err_handler, format_response, BatchFetcher, DEFAULT_PAGE_LIMIT};
