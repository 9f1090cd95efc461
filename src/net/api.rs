//! Typed data-fetching wrappers for marketplace operations.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` and the row
//! endpoints in [`super::table`].
//! Server-side (SSR): stubs returning `None`/empty/`Err` since these calls
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! List fetches degrade to empty row sets (logged, never thrown) so pages
//! render their empty states; writes surface `Result` so forms can show a
//! failure message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::table::{Sort, TableQuery};
use super::types::{NewOrder, Order, OrderStatus, Product, User};

fn status_patch(status: OrderStatus) -> serde_json::Value {
    serde_json::json!({ "status": status })
}

async fn select_or_empty<T: serde::de::DeserializeOwned>(query: TableQuery) -> Vec<T> {
    match super::table::select_rows(&query).await {
        Ok(rows) => rows,
        Err(error) => {
            log::warn!("row fetch for {} failed: {error}", query.to_path());
            Vec::new()
        }
    }
}

// =============================================================================
// AUTH SESSION
// =============================================================================

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a message when credentials are rejected or the request fails.
pub async fn sign_in(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&LoginRequest { email, password })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("sign-in failed: {}", resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on the server".to_owned())
    }
}

/// End the current session by calling `POST /api/auth/logout`.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        if gloo_net::http::Request::post("/api/auth/logout").send().await.is_err() {
            log::warn!("logout request failed; session may still be active");
        }
    }
}

// =============================================================================
// PRODUCTS
// =============================================================================

/// Fetch the storefront product list, newest first.
pub async fn fetch_products() -> Vec<Product> {
    select_or_empty(TableQuery::new("products").order_by("created_at", Sort::Desc)).await
}

/// Fetch a single product by id. Returns `None` when absent.
pub async fn fetch_product(product_id: &str) -> Option<Product> {
    let rows: Vec<Product> =
        select_or_empty(TableQuery::new("products").eq("id", product_id).limit(1)).await;
    rows.into_iter().next()
}

/// Fetch the products listed by one seller, newest first.
pub async fn fetch_seller_products(seller_id: &str) -> Vec<Product> {
    select_or_empty(
        TableQuery::new("products")
            .eq("seller_id", seller_id)
            .order_by("created_at", Sort::Desc),
    )
    .await
}

// =============================================================================
// ORDERS
// =============================================================================

/// Insert a new order at checkout. Returns the stored order row.
///
/// # Errors
///
/// Returns a message when the insert is rejected or the request fails.
pub async fn create_order(order: &NewOrder) -> Result<Order, String> {
    super::table::insert_row("orders", order).await
}

/// Fetch a buyer's orders, newest first.
pub async fn fetch_buyer_orders(buyer_id: &str) -> Vec<Order> {
    select_or_empty(
        TableQuery::new("orders").eq("buyer_id", buyer_id).order_by("created_at", Sort::Desc),
    )
    .await
}

/// Fetch the orders a seller has to fulfil, newest first.
pub async fn fetch_seller_orders(seller_id: &str) -> Vec<Order> {
    select_or_empty(
        TableQuery::new("orders").eq("seller_id", seller_id).order_by("created_at", Sort::Desc),
    )
    .await
}

/// Fetch every order on the marketplace (admin overview), newest first.
pub async fn fetch_all_orders() -> Vec<Order> {
    select_or_empty(TableQuery::new("orders").order_by("created_at", Sort::Desc)).await
}

/// Move an order to a new fulfilment status.
///
/// # Errors
///
/// Returns a message when the update is rejected or the request fails.
pub async fn update_order_status(order_id: &str, status: OrderStatus) -> Result<(), String> {
    super::table::update_row("orders", order_id, &status_patch(status)).await
}

// =============================================================================
// USERS (ADMIN)
// =============================================================================

/// Fetch every registered user (admin overview).
pub async fn fetch_users() -> Vec<User> {
    select_or_empty(TableQuery::new("users").order_by("name", Sort::Asc)).await
}
