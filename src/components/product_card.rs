//! Reusable card component for product list items on the shop grid.
//!
//! DESIGN
//! ======
//! Keeps product presentation consistent between the shop grid and the
//! wishlist page while centralizing the favorite affordance.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::state::wishlist::{entry_for_product, use_wishlist};
use crate::util::money::format_price_cents;

/// A clickable card representing a product, with a favorite toggle.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let wishlist = use_wishlist();
    let toggle_entry = entry_for_product(&product);
    let Product { id, name, image_url, price_cents, stock, .. } = product;

    let href = format!("/product/{id}");
    let favorited = move || wishlist.contains(&id);
    let heart = {
        let favorited = favorited.clone();
        move || if favorited() { "♥" } else { "♡" }
    };
    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        wishlist.toggle(toggle_entry.clone());
    };

    view! {
        <a class="product-card" href=href>
            {image_url.map(|url| view! { <img class="product-card__image" src=url alt=name.clone()/> })}
            <span class="product-card__name">{name.clone()}</span>
            <span class="product-card__price">{format_price_cents(price_cents)}</span>
            <Show when=move || stock == 0>
                <span class="product-card__badge">"Out of stock"</span>
            </Show>
            <button
                class="product-card__favorite"
                class:product-card__favorite--active=favorited
                on:click=on_toggle
                title="Toggle wishlist"
                aria-label="Toggle wishlist"
            >
                {heart}
            </button>
        </a>
    }
}
