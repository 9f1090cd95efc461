//! Row component for order lists on the buyer and seller pages.

use leptos::prelude::*;

use crate::net::types::{Order, OrderStatus};
use crate::util::money::format_price_cents;

/// A single order row with status chip and optional status-advance control.
///
/// Buyer pages render the row read-only; the seller dashboard passes
/// `on_advance` to move the order to its next fulfilment step.
#[component]
pub fn OrderRow(
    order: Order,
    #[prop(optional, into)] on_advance: Option<Callback<(String, OrderStatus)>>,
) -> impl IntoView {
    let status_class = format!("order-row__status order-row__status--{}", order.status.label().to_ascii_lowercase());
    let advance_control = on_advance.and_then(|on_advance| {
        order.status.next().map(|next| {
            let order_id = order.id.clone();
            view! {
                <button
                    class="btn order-row__advance"
                    on:click=move |_| on_advance.run((order_id.clone(), next))
                >
                    {format!("Mark {}", next.label())}
                </button>
            }
        })
    });

    view! {
        <div class="order-row">
            <span class="order-row__product">{order.product_name.clone()}</span>
            <span class="order-row__quantity">{format!("x{}", order.quantity)}</span>
            <span class="order-row__total">{format_price_cents(order.total_cents)}</span>
            <span class="order-row__mode">{order.delivery_mode.label()}</span>
            {order
                .shipping_address
                .clone()
                .map(|address| view! { <span class="order-row__address">{address}</span> })}
            <span class=status_class>{order.status.label()}</span>
            {advance_control}
        </div>
    }
}
