//! Display formatting for money and growth figures.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Price with two decimals, as the plan tables show it.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Whole-dollar amount with thousands separators, as the dashboard
/// revenue card shows it.
pub fn format_usd(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let whole = amount.round() as i64;
    let negative = whole < 0;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Signed percentage label for a growth delta, e.g. `+12%` / `-3%`.
pub fn growth_label(change: f64) -> String {
    format!("{change:+.0}%")
}

/// A value for display, or the fallback when the value is blank.
pub fn display_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() { fallback } else { value }
}
