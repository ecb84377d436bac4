//! User page sources.
//!
//! This module provides the fetch port consumed by the coordinator:
//! - [`RecordFetch`] - the async capability "give me page N of filter F"
//! - [`http::RandomUserClient`] - production source backed by randomuser.me
//! - [`scripted::ScriptedSource`] - in-memory source with controllable
//!   completion order, for tests

use crate::model::{Category, FetchError, PageNumber, User};
use async_trait::async_trait;

pub mod dto;
pub mod http;
/// Test support: scripted source and `sample_user` fixtures. Shared with
/// `tests/` and `benches/`, which link the library like any other crate.
/// Not used by the binary.
pub mod scripted;

pub use http::{build_page_url, RandomUserClient, SourceConfig};
pub use scripted::{Gate, ScriptedSource};

/// Server-reported page metadata. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageInfo {
    /// Page number echoed by the server.
    pub page: u32,
    /// Number of results the server reports for this page.
    pub results: u32,
    /// Seed the server used to generate the page.
    pub seed: String,
    /// API version string.
    pub version: String,
}

/// Ordered batch of records for one page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageBatch {
    /// Records in server order.
    pub records: Vec<User>,
    /// Server-reported metadata.
    pub info: PageInfo,
}

impl PageBatch {
    /// Batch without server metadata.
    pub fn from_records(records: Vec<User>) -> Self {
        Self {
            records,
            info: PageInfo::default(),
        }
    }
}

/// Asynchronous capability that yields one page of records.
///
/// Implementations own transport, decoding and timeouts. The coordinator
/// only awaits the result; it never cancels an in-flight call.
#[async_trait]
pub trait RecordFetch: Send + Sync {
    /// Fetch `page` of the records admitted by `filter`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] describing why the page is unavailable.
    async fn fetch(&self, page: PageNumber, filter: Category) -> Result<PageBatch, FetchError>;
}
