//! Download results reporting.

use console::style;

use crate::download::DownloadSummary;

/// Print the final download results block, including failed URLs.
pub fn print_download_summary(summary: &DownloadSummary) {
    println!();
    println!("{}", style("Download results:").bold());
    println!("Unfinished: {}", summary.unfinished);
    println!("Success:    {}", style(summary.success).green());
    println!("Skipped:    {}", summary.skipped);
    if summary.failure_count() > 0 {
        println!("Failures:   {}", style(summary.failure_count()).red());
    } else {
        println!("Failures:   0");
    }

    for url in &summary.failed_urls {
        println!("  {}", url);
    }
}
