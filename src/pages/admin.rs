//! Admin dashboard — marketplace-wide users and activity.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::stats::aggregate_marketplace_stats;
#[cfg(feature = "hydrate")]
use crate::util::guard::install_role_redirect;
use crate::util::money::format_price_cents;

/// Admin dashboard for the `/admin` route. Requires the admin role.
#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    install_role_redirect(auth, Role::Admin, use_navigate());
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;

    let users = LocalResource::new(|| crate::net::api::fetch_users());
    let orders = LocalResource::new(|| crate::net::api::fetch_all_orders());

    let stats = move || {
        let users = users.get().unwrap_or_default();
        let orders = orders.get().unwrap_or_default();
        aggregate_marketplace_stats(&users, &orders)
    };

    view! {
        <div class="admin-page">
            <h1>"Marketplace admin"</h1>

            <section class="admin-page__stats">
                <div class="stat-tile">
                    <span class="stat-tile__value">{move || stats().total_users}</span>
                    <span class="stat-tile__label">"Users"</span>
                </div>
                <div class="stat-tile">
                    <span class="stat-tile__value">{move || stats().sellers}</span>
                    <span class="stat-tile__label">"Sellers"</span>
                </div>
                <div class="stat-tile">
                    <span class="stat-tile__value">{move || stats().total_orders}</span>
                    <span class="stat-tile__label">"Orders"</span>
                </div>
                <div class="stat-tile">
                    <span class="stat-tile__value">
                        {move || format_price_cents(stats().revenue_cents)}
                    </span>
                    <span class="stat-tile__label">"Revenue"</span>
                </div>
            </section>

            <section class="admin-page__users">
                <h2>"Users"</h2>
                <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                    {move || {
                        users
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! { <p>"No users yet."</p> }.into_any()
                                } else {
                                    view! {
                                        <ul class="admin-page__user-list">
                                            {list
                                                .into_iter()
                                                .map(|user| {
                                                    let role_chip = format!(
                                                        "admin-page__role admin-page__role--{}",
                                                        match user.role {
                                                            Role::Buyer => "buyer",
                                                            Role::Seller => "seller",
                                                            Role::Admin => "admin",
                                                        },
                                                    );
                                                    view! {
                                                        <li class="admin-page__user">
                                                            <span class="admin-page__user-name">{user.name.clone()}</span>
                                                            <span class="admin-page__user-email">{user.email.clone()}</span>
                                                            <span class=role_chip>{format!("{:?}", user.role)}</span>
                                                        </li>
                                                    }
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
