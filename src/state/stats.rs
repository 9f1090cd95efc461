//! Dashboard aggregation over fetched order and user rows.
//!
//! DESIGN
//! ======
//! The backend exposes plain row queries, so dashboard numbers are computed
//! client-side from the fetched rows: cancelled orders never count toward
//! revenue, and an order is "open" until delivered or cancelled.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::net::types::{Order, OrderStatus, Role, User};

/// Aggregate numbers for the seller dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SellerStats {
    /// All orders ever received.
    pub total_orders: usize,
    /// Orders still moving through fulfilment.
    pub open_orders: usize,
    /// Orders that reached the buyer.
    pub delivered_orders: usize,
    /// Revenue across non-cancelled orders, in minor currency units.
    pub revenue_cents: i64,
}

/// Aggregate a seller's fetched orders into dashboard numbers.
#[must_use]
pub fn aggregate_seller_stats(orders: &[Order]) -> SellerStats {
    let mut stats = SellerStats { total_orders: orders.len(), ..SellerStats::default() };
    for order in orders {
        match order.status {
            OrderStatus::Pending | OrderStatus::Packed | OrderStatus::Shipped => {
                stats.open_orders += 1;
            }
            OrderStatus::Delivered => stats.delivered_orders += 1,
            OrderStatus::Cancelled => {}
        }
        if order.status != OrderStatus::Cancelled {
            stats.revenue_cents = stats.revenue_cents.saturating_add(order.total_cents);
        }
    }
    stats
}

/// Aggregate numbers for the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarketplaceStats {
    /// Registered users of any role.
    pub total_users: usize,
    /// Users with the seller role.
    pub sellers: usize,
    /// All orders across the marketplace.
    pub total_orders: usize,
    /// Revenue across non-cancelled orders, in minor currency units.
    pub revenue_cents: i64,
}

/// Aggregate fetched users and orders into marketplace-wide numbers.
#[must_use]
pub fn aggregate_marketplace_stats(users: &[User], orders: &[Order]) -> MarketplaceStats {
    let seller_stats = aggregate_seller_stats(orders);
    MarketplaceStats {
        total_users: users.len(),
        sellers: users.iter().filter(|user| user.role == Role::Seller).count(),
        total_orders: seller_stats.total_orders,
        revenue_cents: seller_stats.revenue_cents,
    }
}
