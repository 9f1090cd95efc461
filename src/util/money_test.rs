use super::*;

#[test]
fn formats_dollars_and_cents() {
    assert_eq!(format_price_cents(1299), "$12.99");
}

#[test]
fn pads_single_digit_cents() {
    assert_eq!(format_price_cents(405), "$4.05");
}

#[test]
fn formats_whole_dollar_amounts() {
    assert_eq!(format_price_cents(700), "$7.00");
}

#[test]
fn formats_zero() {
    assert_eq!(format_price_cents(0), "$0.00");
}

#[test]
fn formats_sub_dollar_amounts() {
    assert_eq!(format_price_cents(99), "$0.99");
}

#[test]
fn negative_amounts_keep_sign_before_symbol() {
    assert_eq!(format_price_cents(-450), "-$4.50");
}

#[test]
fn line_total_multiplies_quantity() {
    assert_eq!(format_line_total(450, 3), "$13.50");
}

#[test]
fn line_total_saturates_instead_of_overflowing() {
    assert_eq!(format_line_total(i64::MAX, 2), format_price_cents(i64::MAX));
}
