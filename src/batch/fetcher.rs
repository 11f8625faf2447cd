//! Batched page fetching over a paginated collection endpoint

use crate::error::{Error, Result};
use crate::transport::Transport;
use crate::types::{CollectionPage, Filter, PageQuery, Response};
use futures::future;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Records fetched per page unless overridden
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Extract the record sequence from a successful collection response.
///
/// Returns `response.body.data`. A body that does not decode as a collection
/// page collapses into the normalized remote error, like every other
/// request-level failure.
pub fn format_response<R: DeserializeOwned>(response: Response) -> Result<Vec<R>> {
    decode_page(response).map(|page| page.data)
}

/// Normalize a failed response into the uniform error shape.
///
/// The error carries the decoded body of the failing response as its
/// payload. All downstream error handling operates on this shape, never on
/// raw transport failures.
pub fn err_handler(response: Response) -> Error {
    Error::Remote {
        body: response.body,
    }
}

fn decode_page<R: DeserializeOwned>(response: Response) -> Result<CollectionPage<R>> {
    serde_json::from_value(response.body)
        .map_err(|e| Error::remote(Value::String(format!("malformed collection body: {e}"))))
}

/// Fetches every page of a collection endpoint.
///
/// The transport is injected so the fetcher stays testable with a fake; it
/// performs no retries, auth, or URL building of its own. Each invocation of
/// [`fetch_all`](BatchFetcher::fetch_all) issues `1 + extra_pages` requests
/// and nothing is cached across calls.
#[derive(Debug)]
pub struct BatchFetcher<T> {
    transport: T,
    limit: u32,
}

impl<T: Transport> BatchFetcher<T> {
    /// Create a fetcher over the given transport with the default page limit
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }

    /// Override the page limit (must be positive)
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Get the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch all records at `path`, batching across pages.
    ///
    /// Issues the first page request, and if the reported `totalCount`
    /// exceeds the page limit, fans out one concurrent request per remaining
    /// page and joins on the whole batch. The result concatenates every
    /// page's records in page order. Any page failing rejects the whole
    /// operation with the normalized error of the first failing page — no
    /// partial results.
    pub async fn fetch_all<R: DeserializeOwned>(
        &self,
        path: &str,
        filter: Option<&Filter>,
    ) -> Result<Vec<R>> {
        let query = PageQuery::new(self.limit, filter);

        // Page 1 is sequential: its count gates the fan-out.
        let first = self.fetch_page(path, &query).await?;
        let total = first.total_count;
        let limit = u64::from(self.limit.max(1));
        let mut records = first.data;

        if total <= limit {
            return Ok(records);
        }

        let extra_pages = (total - limit).div_ceil(limit) as u32;
        debug!(
            "{} records at {}, fetching {} extra pages",
            total, path, extra_pages
        );

        // Fan out pages 2..N concurrently and join on the whole batch.
        // Each request owns its query clone; nothing mutable is shared.
        let requests = (2..=extra_pages + 1).map(|page| {
            let query = query.with_page(page);
            async move { self.fetch_page(path, &query).await }
        });

        for result in future::join_all(requests).await {
            records.extend(result?.data);
        }

        Ok(records)
    }

    async fn fetch_page<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &PageQuery,
    ) -> Result<CollectionPage<R>> {
        let response = self.transport.get(path, query).await?;
        if !response.is_success() {
            return Err(err_handler(response));
        }
        decode_page(response)
    }
}
