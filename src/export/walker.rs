//! Lazy walk over the cursor-linked video listing.

use std::collections::VecDeque;

use crate::api::paging::PagingSource;
use crate::api::types::RawVideo;
use crate::error::{Error, Result};

/// Walks listing pages in link order and yields raw entries one at a time.
///
/// The walk is finite and non-restartable: it ends when a page carries no
/// next pointer or when the optional entry limit is reached. The limit is
/// checked per entry, so hitting it mid-page means the rest of that page is
/// dropped and no further page is ever fetched.
pub struct PageWalker<'a, S: PagingSource> {
    source: &'a S,
    next_page: Option<String>,
    limit: Option<u64>,
    yielded: u64,
    buffer: VecDeque<RawVideo>,
}

impl<'a, S: PagingSource> PageWalker<'a, S> {
    pub fn new(source: &'a S, first_page: String, limit: Option<u64>) -> Self {
        Self {
            source,
            next_page: Some(first_page),
            limit,
            yielded: 0,
            buffer: VecDeque::new(),
        }
    }

    /// Yield the next raw entry, fetching pages as needed.
    ///
    /// A failed page fetch is fatal for the whole harvest.
    pub async fn next_entry(&mut self) -> Result<Option<RawVideo>> {
        if let Some(limit) = self.limit {
            if self.yielded >= limit {
                return Ok(None);
            }
        }

        while self.buffer.is_empty() {
            let Some(path) = self.next_page.take() else {
                return Ok(None);
            };
            let page = self
                .source
                .fetch_page(&path)
                .await
                .map_err(|e| Error::PagingSource(e.to_string()))?;
            self.next_page = page.paging.next;
            self.buffer.extend(page.data);
        }

        self.yielded += 1;
        Ok(self.buffer.pop_front())
    }
}
