//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::net::types::DeliveryMode;
use crate::pages::{
    admin::AdminPage, checkout::CheckoutPage, login::LoginPage, orders::OrdersPage,
    product::ProductPage, seller::SellerPage, shop::ShopPage, wishlist::WishlistPage,
};
use crate::state::addresses::AddressBookContext;
use crate::state::auth::AuthState;
use crate::state::wishlist::WishlistContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the shared state for the whole tree (auth session, device-local
/// wishlist and address book, delivery-mode preference), provides it via
/// context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let delivery = RwSignal::new(DeliveryMode::default());
    let wishlist = WishlistContext::new();
    let addresses = AddressBookContext::new();

    provide_context(auth);
    provide_context(delivery);
    provide_context(wishlist);
    provide_context(addresses);

    // Resolve the session probe and stored preferences once in the browser.
    #[cfg(feature = "hydrate")]
    {
        delivery.set(crate::state::delivery::load_preference());
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_current_user().await {
                Some(user) => auth.set(AuthState::signed_in(user)),
                None => auth.set(AuthState::signed_out()),
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/bazaar.css"/>
        <Title text="Bazaar"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=ShopPage/>
                <Route path=(StaticSegment("product"), ParamSegment("id")) view=ProductPage/>
                <Route path=StaticSegment("wishlist") view=WishlistPage/>
                <Route path=(StaticSegment("checkout"), ParamSegment("id")) view=CheckoutPage/>
                <Route path=StaticSegment("orders") view=OrdersPage/>
                <Route path=StaticSegment("seller") view=SellerPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}
