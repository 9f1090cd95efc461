use super::*;

fn listing() -> Product {
    Product {
        id: "p1".to_owned(),
        seller_id: "u2".to_owned(),
        name: "Soap".to_owned(),
        description: String::new(),
        image_url: None,
        price_cents: 450,
        stock: 5,
        created_at: "2026-01-05T10:00:00Z".to_owned(),
    }
}

// =============================================================
// validate_quantity
// =============================================================

#[test]
fn quantity_accepts_in_stock_values() {
    assert_eq!(validate_quantity("3", 5), Ok(3));
    assert_eq!(validate_quantity(" 1 ", 5), Ok(1));
}

#[test]
fn quantity_rejects_non_numbers() {
    assert_eq!(validate_quantity("many", 5), Err("Enter a whole-number quantity."));
    assert_eq!(validate_quantity("1.5", 5), Err("Enter a whole-number quantity."));
}

#[test]
fn quantity_rejects_zero_and_negatives() {
    assert_eq!(validate_quantity("0", 5), Err("Quantity must be at least 1."));
    assert_eq!(validate_quantity("-2", 5), Err("Quantity must be at least 1."));
}

#[test]
fn quantity_rejects_beyond_stock() {
    assert_eq!(validate_quantity("6", 5), Err("Not enough stock for that quantity."));
}

// =============================================================
// validate_new_address
// =============================================================

#[test]
fn address_requires_core_fields() {
    let result = validate_new_address("Home", "", "12 Market Lane", "", "Portsmouth", "PO1 2AB", "");
    assert_eq!(result, Err("Fill in label, recipient, address, city, and postal code."));
}

#[test]
fn address_trims_fields_and_drops_empty_optionals() {
    let address = validate_new_address(
        " Home ",
        " Avery Quinn ",
        " 12 Market Lane ",
        "   ",
        " Portsmouth ",
        " PO1 2AB ",
        "",
    )
    .unwrap();
    assert_eq!(address.label, "Home");
    assert_eq!(address.recipient, "Avery Quinn");
    assert_eq!(address.line1, "12 Market Lane");
    assert_eq!(address.line2, None);
    assert_eq!(address.city, "Portsmouth");
    assert_eq!(address.postal_code, "PO1 2AB");
    assert_eq!(address.phone, None);
}

#[test]
fn address_keeps_provided_optionals() {
    let address = validate_new_address(
        "Work",
        "Avery Quinn",
        "1 Dock Street",
        "Unit 4",
        "Portsmouth",
        "PO1 3CD",
        "+44 7700 900123",
    )
    .unwrap();
    assert_eq!(address.line2, Some("Unit 4".to_owned()));
    assert_eq!(address.phone, Some("+44 7700 900123".to_owned()));
}

// =============================================================
// build_new_order
// =============================================================

#[test]
fn order_copies_listing_and_buyer_fields() {
    let order = build_new_order(&listing(), "u1", 2, DeliveryMode::Courier, Some("addr".to_owned()));
    assert_eq!(order.product_id, "p1");
    assert_eq!(order.product_name, "Soap");
    assert_eq!(order.buyer_id, "u1");
    assert_eq!(order.seller_id, "u2");
    assert_eq!(order.quantity, 2);
    assert_eq!(order.shipping_address, Some("addr".to_owned()));
}

#[test]
fn order_total_multiplies_price_by_quantity() {
    let order = build_new_order(&listing(), "u1", 3, DeliveryMode::Pickup, None);
    assert_eq!(order.total_cents, 1350);
}

#[test]
fn pickup_orders_carry_no_address() {
    let order = build_new_order(&listing(), "u1", 1, DeliveryMode::Pickup, None);
    assert_eq!(order.delivery_mode, DeliveryMode::Pickup);
    assert_eq!(order.shipping_address, None);
}

#[test]
fn order_total_saturates_instead_of_overflowing() {
    let mut expensive = listing();
    expensive.price_cents = i64::MAX;
    let order = build_new_order(&expensive, "u1", 2, DeliveryMode::Pickup, None);
    assert_eq!(order.total_cents, i64::MAX);
}
