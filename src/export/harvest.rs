//! The metadata harvest: pages -> validated records -> CSV rows.

use crate::api::paging::PagingSource;
use crate::error::Result;
use crate::export::record::{normalize, MetadataRecord};
use crate::export::sink::CsvSink;
use crate::export::walker::PageWalker;
use crate::output::format_progress;

/// Walk the whole listing, validating each entry and appending it to the
/// sink as it arrives. Returns the records in harvest order.
///
/// A page fetch error or a single malformed record aborts the harvest;
/// rows already appended stay on disk.
pub async fn harvest<S: PagingSource>(
    source: &S,
    first_page: String,
    limit: Option<u64>,
    total: u64,
    sink: &mut CsvSink,
) -> Result<Vec<MetadataRecord>> {
    let mut walker = PageWalker::new(source, first_page, limit);
    let mut records: Vec<MetadataRecord> = Vec::new();

    while let Some(raw) = walker.next_entry().await? {
        let record = normalize(&raw)?;
        sink.append(&record)?;
        println!(
            "Processed {}",
            format_progress(records.len() as u64 + 1, total, &record.name)
        );
        records.push(record);
    }

    Ok(records)
}
