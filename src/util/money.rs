//! Price formatting for integer-cent amounts.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Format an amount in minor currency units as a display price, e.g.
/// `1299` → `"$12.99"`. Negative amounts keep the sign ahead of the symbol.
#[must_use]
pub fn format_price_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    format!("{sign}${}.{:02}", magnitude / 100, magnitude % 100)
}

/// Format a line total for `quantity` units at `price_cents` each.
#[must_use]
pub fn format_line_total(price_cents: i64, quantity: i64) -> String {
    format_price_cents(price_cents.saturating_mul(quantity))
}
