//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's table rows so serde round-trips stay
//! lossless and the data-fetching layer can remain schema-driven. Money is
//! carried in minor currency units (cents) to keep arithmetic exact.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Marketplace role attached to an authenticated user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Browses, favorites, and orders products.
    #[default]
    Buyer,
    /// Lists products and fulfils orders.
    Seller,
    /// Oversees users and marketplace activity.
    Admin,
}

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Sign-in email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Marketplace role.
    #[serde(default)]
    pub role: Role,
}

/// A product row from the `products` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier (UUID string).
    pub id: String,
    /// Seller who listed the product (UUID string).
    pub seller_id: String,
    /// Display name.
    pub name: String,
    /// Long-form description shown on the detail page.
    #[serde(default)]
    pub description: String,
    /// Image URL, if the listing has one.
    pub image_url: Option<String>,
    /// Listed price in minor currency units.
    pub price_cents: i64,
    /// Units currently in stock.
    pub stock: i64,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

/// Fulfilment lifecycle of an order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, awaiting the seller.
    #[default]
    Pending,
    /// Packed by the seller.
    Packed,
    /// Handed to the carrier.
    Shipped,
    /// Received by the buyer.
    Delivered,
    /// Cancelled before fulfilment.
    Cancelled,
}

impl OrderStatus {
    /// The next fulfilment step a seller can advance to, if any.
    ///
    /// Terminal states (`Delivered`, `Cancelled`) have no next step.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Packed),
            Self::Packed => Some(Self::Shipped),
            Self::Shipped => Some(Self::Delivered),
            Self::Delivered | Self::Cancelled => None,
        }
    }

    /// Human-readable label for status chips and buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Packed => "Packed",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// How an order reaches the buyer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Courier delivery to a saved address.
    #[default]
    Courier,
    /// Collection from a pickup point.
    Pickup,
}

impl DeliveryMode {
    /// Stable slot/wire value for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Courier => "courier",
            Self::Pickup => "pickup",
        }
    }

    /// Parse a stored slot value; unknown or absent values fall back to the
    /// default mode.
    #[must_use]
    pub fn from_slot_value(value: Option<&str>) -> Self {
        match value {
            Some("pickup") => Self::Pickup,
            _ => Self::Courier,
        }
    }

    /// Human-readable label for selectors.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Courier => "Courier delivery",
            Self::Pickup => "Pickup point",
        }
    }
}

/// An order row from the `orders` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier (UUID string).
    pub id: String,
    /// Ordered product (UUID string).
    pub product_id: String,
    /// Product name denormalized at order time.
    pub product_name: String,
    /// Buyer who placed the order (UUID string).
    pub buyer_id: String,
    /// Seller fulfilling the order (UUID string).
    pub seller_id: String,
    /// Ordered quantity.
    pub quantity: i64,
    /// Order total in minor currency units.
    pub total_cents: i64,
    /// Fulfilment status.
    #[serde(default)]
    pub status: OrderStatus,
    /// Chosen delivery mode.
    #[serde(default)]
    pub delivery_mode: DeliveryMode,
    /// Delivery address rendered to a single line, when mode is courier.
    pub shipping_address: Option<String>,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

/// Payload inserted into the `orders` table when a buyer checks out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    /// Ordered product (UUID string).
    pub product_id: String,
    /// Product name denormalized at order time.
    pub product_name: String,
    /// Buyer placing the order (UUID string).
    pub buyer_id: String,
    /// Seller fulfilling the order (UUID string).
    pub seller_id: String,
    /// Ordered quantity.
    pub quantity: i64,
    /// Order total in minor currency units.
    pub total_cents: i64,
    /// Chosen delivery mode.
    pub delivery_mode: DeliveryMode,
    /// Delivery address rendered to a single line, when mode is courier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
}
