//! Product detail page with wishlist toggle and buy-now.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::Product;
use crate::state::wishlist::{entry_for_product, use_wishlist};
use crate::util::money::format_price_cents;

/// Product detail page for the `/product/:id` route.
#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = move || params.read().get("id").unwrap_or_default();

    let product = LocalResource::new(move || {
        let id = product_id();
        async move { crate::net::api::fetch_product(&id).await }
    });

    view! {
        <div class="product-page">
            <Suspense fallback=move || view! { <p>"Loading product..."</p> }>
                {move || {
                    product
                        .get()
                        .map(|found| match found {
                            Some(product) => view! { <ProductDetail product=product/> }.into_any(),
                            None => view! { <p class="product-page__missing">"Product not found."</p> }
                                .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Detail card for a loaded product.
#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let wishlist = use_wishlist();
    let toggle_entry = entry_for_product(&product);
    let checkout_href = format!("/checkout/{}", product.id);
    let favorite_id = product.id.clone();
    let favorited = move || wishlist.contains(&favorite_id);
    let favorite_label = {
        let favorited = favorited.clone();
        move || if favorited() { "Remove from wishlist" } else { "Add to wishlist" }
    };
    let in_stock = product.stock > 0;

    view! {
        <div class="product-detail">
            {product
                .image_url
                .clone()
                .map(|url| view! { <img class="product-detail__image" src=url alt=product.name.clone()/> })}
            <div class="product-detail__body">
                <h1 class="product-detail__name">{product.name.clone()}</h1>
                <p class="product-detail__price">{format_price_cents(product.price_cents)}</p>
                <p class="product-detail__description">{product.description.clone()}</p>
                <p class="product-detail__stock">
                    {if in_stock { format!("{} in stock", product.stock) } else { "Out of stock".to_owned() }}
                </p>
                <div class="product-detail__actions">
                    <button
                        class="btn"
                        class:btn--active=favorited
                        on:click=move |_| wishlist.toggle(toggle_entry.clone())
                    >
                        {favorite_label}
                    </button>
                    <Show when=move || in_stock>
                        <a class="btn btn--primary" href=checkout_href.clone()>
                            "Buy now"
                        </a>
                    </Show>
                </div>
            </div>
        </div>
    }
}
