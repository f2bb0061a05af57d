use super::*;
use chain::campaign::funding_percentage;

// =============================================================
// Width style
// =============================================================

#[test]
fn whole_percentages_have_no_decimals() {
    assert_eq!(width_style(25.0), "25%");
    assert_eq!(width_style(100.0), "100%");
    assert_eq!(width_style(0.0), "0%");
}

#[test]
fn fractional_percentages_keep_two_decimals() {
    assert_eq!(width_style(33.333_333), "33.33%");
}

// =============================================================
// Label
// =============================================================

#[test]
fn partial_funding_shows_two_decimal_label() {
    assert_eq!(percent_label(25.0).as_deref(), Some("25.00%"));
}

#[test]
fn full_funding_shows_no_label() {
    assert_eq!(percent_label(100.0), None);
}

// =============================================================
// End-to-end percentage rendering, goal=1000
// =============================================================

#[test]
fn quarter_funded_scenario() {
    let pct = funding_percentage(250, 1000);
    assert_eq!(width_style(pct), "25%");
    assert_eq!(percent_label(pct).as_deref(), Some("25.00%"));
}

#[test]
fn overfunded_scenario() {
    let pct = funding_percentage(1200, 1000);
    assert_eq!(width_style(pct), "100%");
    assert_eq!(percent_label(pct), None);
}

// =============================================================
// Amounts
// =============================================================

#[test]
fn amounts_render_as_raw_integers() {
    assert_eq!(format_amount(0), "$0");
    assert_eq!(format_amount(1200), "$1200");
}
