//! Orders page — the buyer's order history.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::order_row::OrderRow;
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::util::guard::install_unauth_redirect;

/// Buyer order history for the `/orders` route. Requires a session.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    install_unauth_redirect(auth, use_navigate());

    let orders = LocalResource::new(move || {
        let buyer_id = auth.get().user.map(|user| user.id);
        async move {
            match buyer_id {
                Some(id) => crate::net::api::fetch_buyer_orders(&id).await,
                None => Vec::new(),
            }
        }
    });

    view! {
        <div class="orders-page">
            <h1>"Your orders"</h1>
            <Suspense fallback=move || view! { <p>"Loading orders..."</p> }>
                {move || {
                    orders
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p class="orders-page__empty">"No orders yet."</p> }.into_any()
                            } else {
                                view! {
                                    <div class="orders-page__list">
                                        {list
                                            .into_iter()
                                            .map(|order| view! { <OrderRow order=order/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
