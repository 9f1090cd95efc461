use super::*;
use crate::net::types::DeliveryMode;

fn order(status: OrderStatus, total_cents: i64) -> Order {
    Order {
        id: "o1".to_owned(),
        product_id: "p1".to_owned(),
        product_name: "Soap".to_owned(),
        buyer_id: "u1".to_owned(),
        seller_id: "u2".to_owned(),
        quantity: 1,
        total_cents,
        status,
        delivery_mode: DeliveryMode::Courier,
        shipping_address: None,
        created_at: "2026-01-05T10:00:00Z".to_owned(),
    }
}

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        name: "Avery".to_owned(),
        role,
    }
}

// =============================================================
// aggregate_seller_stats
// =============================================================

#[test]
fn empty_orders_aggregate_to_zero() {
    assert_eq!(aggregate_seller_stats(&[]), SellerStats::default());
}

#[test]
fn open_orders_cover_all_pre_delivery_statuses() {
    let orders = [
        order(OrderStatus::Pending, 100),
        order(OrderStatus::Packed, 100),
        order(OrderStatus::Shipped, 100),
    ];
    let stats = aggregate_seller_stats(&orders);
    assert_eq!(stats.total_orders, 3);
    assert_eq!(stats.open_orders, 3);
    assert_eq!(stats.delivered_orders, 0);
}

#[test]
fn delivered_orders_counted_separately() {
    let orders = [order(OrderStatus::Delivered, 500), order(OrderStatus::Pending, 300)];
    let stats = aggregate_seller_stats(&orders);
    assert_eq!(stats.delivered_orders, 1);
    assert_eq!(stats.open_orders, 1);
}

#[test]
fn revenue_sums_non_cancelled_totals() {
    let orders = [
        order(OrderStatus::Pending, 450),
        order(OrderStatus::Delivered, 1299),
        order(OrderStatus::Cancelled, 99_999),
    ];
    let stats = aggregate_seller_stats(&orders);
    assert_eq!(stats.revenue_cents, 1749);
}

#[test]
fn cancelled_orders_count_toward_total_only() {
    let orders = [order(OrderStatus::Cancelled, 100)];
    let stats = aggregate_seller_stats(&orders);
    assert_eq!(stats.total_orders, 1);
    assert_eq!(stats.open_orders, 0);
    assert_eq!(stats.delivered_orders, 0);
    assert_eq!(stats.revenue_cents, 0);
}

#[test]
fn revenue_saturates_instead_of_overflowing() {
    let orders = [order(OrderStatus::Pending, i64::MAX), order(OrderStatus::Pending, 1)];
    let stats = aggregate_seller_stats(&orders);
    assert_eq!(stats.revenue_cents, i64::MAX);
}

// =============================================================
// aggregate_marketplace_stats
// =============================================================

#[test]
fn marketplace_stats_count_users_by_role() {
    let users = [user(Role::Buyer), user(Role::Seller), user(Role::Seller), user(Role::Admin)];
    let stats = aggregate_marketplace_stats(&users, &[]);
    assert_eq!(stats.total_users, 4);
    assert_eq!(stats.sellers, 2);
}

#[test]
fn marketplace_stats_reuse_order_aggregation() {
    let orders = [order(OrderStatus::Delivered, 700), order(OrderStatus::Cancelled, 100)];
    let stats = aggregate_marketplace_stats(&[], &orders);
    assert_eq!(stats.total_orders, 2);
    assert_eq!(stats.revenue_cents, 700);
}
