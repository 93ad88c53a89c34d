//! Durable CSV output.

use std::fs::File;
use std::path::Path;

use crate::error::Result;
use crate::export::record::{MetadataRecord, FIELD_NAMES};

/// Append-as-you-go CSV writer with a fixed header.
///
/// Every row is flushed as it is written, so a crash mid-export leaves a
/// valid, parseable file containing all rows appended so far. The file
/// handle is released when the sink is dropped, on every exit path.
pub struct CsvSink {
    writer: csv::Writer<File>,
}

impl CsvSink {
    /// Create the output file and write the header row.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(FIELD_NAMES)?;
        writer.flush()?;
        Ok(Self { writer })
    }

    /// Append one record as a row and flush it to disk.
    pub fn append(&mut self, record: &MetadataRecord) -> Result<()> {
        self.writer.write_record(record.to_row())?;
        self.writer.flush()?;
        Ok(())
    }
}
