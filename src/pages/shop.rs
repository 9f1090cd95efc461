//! Shop page — the storefront product grid.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;

/// Storefront landing page listing every product, newest first.
///
/// Browsing needs no session; the navbar offers sign-in for checkout.
#[component]
pub fn ShopPage() -> impl IntoView {
    let products = LocalResource::new(|| crate::net::api::fetch_products());

    view! {
        <div class="shop-page">
            <header class="shop-page__header">
                <h1>"Shop"</h1>
            </header>
            <Suspense fallback=move || view! { <p>"Loading products..."</p> }>
                {move || {
                    products
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p class="shop-page__empty">"No products listed yet."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="shop-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|product| view! { <ProductCard product=product/> })
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
