//! Progress-bar presentation helpers.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

/// CSS width for the filled portion of a progress bar.
/// Whole percentages render without decimals.
#[must_use]
pub fn width_style(percentage: f64) -> String {
    if percentage.fract() == 0.0 {
        format!("{percentage:.0}%")
    } else {
        format!("{percentage:.2}%")
    }
}

/// The trailing percentage label. Fully funded bars show no label.
#[must_use]
pub fn percent_label(percentage: f64) -> Option<String> {
    if percentage >= 100.0 {
        None
    } else {
        Some(format!("{percentage:.2}%"))
    }
}

/// Raw-integer amount rendered for display, e.g. `$250`.
#[must_use]
pub fn format_amount(amount: u64) -> String {
    format!("${amount}")
}
