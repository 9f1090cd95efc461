//! Top navigation bar with role-aware links and the wishlist badge.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::wishlist::use_wishlist;

/// Storefront navigation bar.
///
/// Shows buyer links always, a dashboard link for sellers and admins, and
/// either the signed-in user with a sign-out button or a sign-in link.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let wishlist = use_wishlist();

    let wishlist_badge = move || {
        let count = wishlist.len();
        if count == 0 { String::new() } else { format!(" ({count})") }
    };

    let dashboard_link = move || {
        auth.get().role().and_then(|role| match role {
            Role::Seller => {
                Some(view! { <a class="navbar__link" href="/seller">"Seller"</a> }.into_any())
            }
            Role::Admin => {
                Some(view! { <a class="navbar__link" href="/admin">"Admin"</a> }.into_any())
            }
            Role::Buyer => None,
        })
    };

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::sign_out().await;
                auth.set(AuthState::signed_out());
            });
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Bazaar"</a>
            <div class="navbar__links">
                <a class="navbar__link" href="/">"Shop"</a>
                <a class="navbar__link" href="/wishlist">
                    "Wishlist"
                    {wishlist_badge}
                </a>
                <a class="navbar__link" href="/orders">"Orders"</a>
                {dashboard_link}
            </div>
            <div class="navbar__session">
                {move || match auth.get().user {
                    Some(user) => view! {
                        <span class="navbar__user">{user.name.clone()}</span>
                        <button class="btn navbar__signout" on:click=on_sign_out>
                            "Sign out"
                        </button>
                    }
                    .into_any(),
                    None => view! {
                        <a class="btn btn--primary" href="/login">"Sign in"</a>
                    }
                    .into_any(),
                }}
            </div>
        </nav>
    }
}
