//! Metadata export module.
//!
//! This module provides:
//! - The page walker over the cursor-linked listing
//! - Raw-entry normalization and validation
//! - The durable CSV sink
//! - The harvest loop tying them together

pub mod harvest;
pub mod record;
pub mod sink;
pub mod walker;

pub use harvest::harvest;
pub use record::{normalize, MetadataRecord, FIELD_NAMES};
pub use sink::CsvSink;
pub use walker::PageWalker;
