//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress line formatting
//! - Download results reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{
    print_download_header, print_error, print_export_header, print_info, print_success,
    print_warning,
};
pub use progress::format_progress;
pub use stats::print_download_summary;
