//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the export-start header.
pub fn print_export_header(
    display_name: &str,
    username: &str,
    video_count: u64,
    limit: Option<u64>,
) {
    println!(
        "Starting export for \"{}\" ({})",
        style(display_name).bold(),
        username
    );
    match limit {
        Some(limit) => println!(
            "Exporting metadata for {} videos (limiting to {})",
            video_count, limit
        ),
        None => println!("Exporting metadata for {} videos", video_count),
    }
}

/// Print the download-phase banner.
pub fn print_download_header() {
    println!();
    println!("{}", style("Starting video file downloads...").bold());
}
