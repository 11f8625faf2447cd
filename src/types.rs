//! Common types used throughout pagekit
//!
//! Shared wire and request types: the transport-level [`Response`], the
//! decoded [`CollectionPage`], the [`Filter`] mapping, and the per-request
//! [`PageQuery`].

use serde::Deserialize;
use serde_json::Value;

/// A filter mapping field names to filter criteria.
///
/// Serialized as a whole into the `filter` query parameter (JSON-encoded);
/// when no filter is supplied the parameter is omitted entirely.
pub type Filter = serde_json::Map<String, Value>;

/// Opaque result of a transport call.
///
/// Carries the HTTP status and the decoded JSON body. Error-status responses
/// are still plain `Response` values — normalizing them into an [`Error`]
/// is the batch layer's job, not the transport's.
///
/// [`Error`]: crate::error::Error
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Decoded response body
    pub body: Value,
}

impl Response {
    /// Create a response from a status code and decoded body
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Decoded body of a successful collection response.
///
/// Records are opaque to the fetcher: `R` is whatever the caller wants to
/// deserialize each element of `data` into.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionPage<R> {
    /// The records in this page, in server-given order
    pub data: Vec<R>,
    /// Total number of records across all pages
    #[serde(rename = "totalCount")]
    pub total_count: u64,
}

/// Query parameters for a single page request.
///
/// Immutable per request: every follow-up page derives a fresh copy via
/// [`PageQuery::with_page`] with only the page number changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// Maximum number of records per page (positive)
    pub limit: u32,
    /// 1-based page number
    pub page: u32,
    /// JSON-encoded filter, if any
    pub filter: Option<String>,
}

impl PageQuery {
    /// Build the query for the first page of a collection
    pub fn new(limit: u32, filter: Option<&Filter>) -> Self {
        Self {
            limit,
            page: 1,
            filter: filter.map(|f| Value::Object(f.clone()).to_string()),
        }
    }

    /// Derive a copy of this query targeting a different page
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Query-parameter pairs for the wire, in a deterministic order
    pub fn as_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("limit".to_string(), self.limit.to_string()),
            ("page".to_string(), self.page.to_string()),
        ];
        if let Some(filter) = &self.filter {
            params.push(("filter".to_string(), filter.clone()));
        }
        params
    }
}
