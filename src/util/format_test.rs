use super::*;

#[test]
fn format_price_keeps_two_decimals() {
    assert_eq!(format_price(49.99), "$49.99");
    assert_eq!(format_price(500.0), "$500.00");
}

#[test]
fn format_usd_groups_thousands() {
    assert_eq!(format_usd(28750.0), "$28,750");
    assert_eq!(format_usd(999.0), "$999");
    assert_eq!(format_usd(1_234_567.0), "$1,234,567");
}

#[test]
fn format_usd_rounds_and_handles_negatives() {
    assert_eq!(format_usd(1000.6), "$1,001");
    assert_eq!(format_usd(-1500.0), "-$1,500");
}

#[test]
fn growth_label_always_carries_a_sign() {
    assert_eq!(growth_label(12.0), "+12%");
    assert_eq!(growth_label(-3.0), "-3%");
    assert_eq!(growth_label(0.0), "+0%");
}

#[test]
fn display_or_falls_back_on_blank_values() {
    assert_eq!(display_or("123 Main St", "No address provided"), "123 Main St");
    assert_eq!(display_or("   ", "No address provided"), "No address provided");
}
