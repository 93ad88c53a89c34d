//! Progress line formatting.

/// Render a `k/n (p%) "label"` progress string.
///
/// `processed` is zero-padded to the digit width of `total`; the percentage
/// is integer truncating division. Pure function, no state.
pub fn format_progress(processed: u64, total: u64, label: &str) -> String {
    let width = total.max(1).to_string().len();
    let percent = if total == 0 {
        0
    } else {
        processed * 100 / total
    };
    format!(
        "{:0width$}/{} ({}%) \"{}\"",
        processed,
        total,
        percent,
        label,
        width = width
    )
}
