//! Seller dashboard — own listings, incoming orders, and fulfilment stats.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::order_row::OrderRow;
use crate::net::types::OrderStatus;
#[cfg(feature = "hydrate")]
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::stats::aggregate_seller_stats;
#[cfg(feature = "hydrate")]
use crate::util::guard::install_role_redirect;
use crate::util::money::format_price_cents;

/// Seller dashboard for the `/seller` route. Requires the seller role.
#[component]
pub fn SellerPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    install_role_redirect(auth, Role::Seller, use_navigate());

    let seller_id = move || auth.get().user.map(|user| user.id);

    let products = LocalResource::new(move || {
        let id = seller_id();
        async move {
            match id {
                Some(id) => crate::net::api::fetch_seller_products(&id).await,
                None => Vec::new(),
            }
        }
    });
    let orders = LocalResource::new(move || {
        let id = seller_id();
        async move {
            match id {
                Some(id) => crate::net::api::fetch_seller_orders(&id).await,
                None => Vec::new(),
            }
        }
    });

    let stats = move || orders.get().map(|list| aggregate_seller_stats(&list)).unwrap_or_default();

    let on_advance = Callback::new(move |(order_id, next): (String, OrderStatus)| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::update_order_status(&order_id, next).await {
                    Ok(()) => orders.refetch(),
                    Err(e) => log::warn!("status update for order {order_id} failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (order_id, next);
        }
    });

    view! {
        <div class="seller-page">
            <h1>"Seller dashboard"</h1>

            <section class="seller-page__stats">
                <div class="stat-tile">
                    <span class="stat-tile__value">{move || stats().total_orders}</span>
                    <span class="stat-tile__label">"Orders"</span>
                </div>
                <div class="stat-tile">
                    <span class="stat-tile__value">{move || stats().open_orders}</span>
                    <span class="stat-tile__label">"Open"</span>
                </div>
                <div class="stat-tile">
                    <span class="stat-tile__value">{move || stats().delivered_orders}</span>
                    <span class="stat-tile__label">"Delivered"</span>
                </div>
                <div class="stat-tile">
                    <span class="stat-tile__value">
                        {move || format_price_cents(stats().revenue_cents)}
                    </span>
                    <span class="stat-tile__label">"Revenue"</span>
                </div>
            </section>

            <section class="seller-page__orders">
                <h2>"Incoming orders"</h2>
                <Suspense fallback=move || view! { <p>"Loading orders..."</p> }>
                    {move || {
                        orders
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! { <p>"No orders yet."</p> }.into_any()
                                } else {
                                    view! {
                                        <div class="seller-page__order-list">
                                            {list
                                                .into_iter()
                                                .map(|order| view! {
                                                    <OrderRow order=order on_advance=on_advance/>
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>

            <section class="seller-page__products">
                <h2>"Your listings"</h2>
                <Suspense fallback=move || view! { <p>"Loading listings..."</p> }>
                    {move || {
                        products
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! { <p>"No listings yet."</p> }.into_any()
                                } else {
                                    view! {
                                        <ul class="seller-page__product-list">
                                            {list
                                                .into_iter()
                                                .map(|product| view! {
                                                    <li class="seller-page__product">
                                                        <span>{product.name.clone()}</span>
                                                        <span>{format_price_cents(product.price_cents)}</span>
                                                        <span>{format!("{} in stock", product.stock)}</span>
                                                    </li>
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
