//! Wishlist page listing the device-local favorites.

use leptos::prelude::*;

use crate::state::wishlist::use_wishlist;
use crate::util::money::format_price_cents;

/// Wishlist page — favorites live on this device, no session required.
#[component]
pub fn WishlistPage() -> impl IntoView {
    let wishlist = use_wishlist();

    view! {
        <div class="wishlist-page">
            <header class="wishlist-page__header">
                <h1>"Wishlist"</h1>
                <Show when=move || !wishlist.is_empty()>
                    <button class="btn" on:click=move |_| wishlist.clear()>
                        "Clear all"
                    </button>
                </Show>
            </header>
            <Show
                when=move || !wishlist.is_empty()
                fallback=|| view! { <p class="wishlist-page__empty">"Nothing favorited yet."</p> }
            >
                <ul class="wishlist-page__list">
                    {move || {
                        wishlist
                            .entries()
                            .into_iter()
                            .map(|entry| {
                                let href = format!("/product/{}", entry.id);
                                let remove_id = entry.id.clone();
                                view! {
                                    <li class="wishlist-page__item">
                                        {entry
                                            .image_url
                                            .clone()
                                            .map(|url| view! {
                                                <img class="wishlist-page__thumb" src=url alt=entry.name.clone()/>
                                            })}
                                        <a class="wishlist-page__name" href=href>{entry.name.clone()}</a>
                                        <span class="wishlist-page__price">
                                            {format_price_cents(entry.price_cents)}
                                        </span>
                                        <button
                                            class="wishlist-page__remove"
                                            on:click=move |_| wishlist.remove(&remove_id)
                                            title="Remove from wishlist"
                                        >
                                            "✕"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </div>
    }
}
