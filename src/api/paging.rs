//! The paging source seam.

use async_trait::async_trait;

use crate::api::types::VideosPage;
use crate::error::Result;

/// A source of cursor-linked listing pages.
///
/// The page walker only ever needs "give me the page behind this pointer";
/// keeping that behind a trait lets tests drive the walker from canned pages.
#[async_trait]
pub trait PagingSource {
    /// Fetch the page identified by `path` (an opaque cursor pointer).
    async fn fetch_page(&self, path: &str) -> Result<VideosPage>;
}
