//! Checkout page — address selection, delivery mode, and order creation.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use stash::address_book::NewAddress;

use crate::components::address_card::{AddressCard, format_address_line};
use crate::net::types::{DeliveryMode, NewOrder, Product};
use crate::state::addresses::use_address_book;
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::util::guard::install_unauth_redirect;
use crate::util::money::format_line_total;

/// Parse and bound the quantity input against available stock.
fn validate_quantity(input: &str, stock: i64) -> Result<i64, &'static str> {
    let Ok(quantity) = input.trim().parse::<i64>() else {
        return Err("Enter a whole-number quantity.");
    };
    if quantity < 1 {
        return Err("Quantity must be at least 1.");
    }
    if quantity > stock {
        return Err("Not enough stock for that quantity.");
    }
    Ok(quantity)
}

/// Validate the new-address form. Label, recipient, first line, city, and
/// postal code are required; the second line and phone are optional.
fn validate_new_address(
    label: &str,
    recipient: &str,
    line1: &str,
    line2: &str,
    city: &str,
    postal_code: &str,
    phone: &str,
) -> Result<NewAddress, &'static str> {
    let required = [label, recipient, line1, city, postal_code];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err("Fill in label, recipient, address, city, and postal code.");
    }
    let optional = |field: &str| {
        let field = field.trim();
        if field.is_empty() { None } else { Some(field.to_owned()) }
    };
    Ok(NewAddress {
        label: label.trim().to_owned(),
        recipient: recipient.trim().to_owned(),
        line1: line1.trim().to_owned(),
        line2: optional(line2),
        city: city.trim().to_owned(),
        postal_code: postal_code.trim().to_owned(),
        phone: optional(phone),
    })
}

/// Assemble the order row inserted at checkout.
fn build_new_order(
    product: &Product,
    buyer_id: &str,
    quantity: i64,
    delivery_mode: DeliveryMode,
    shipping_address: Option<String>,
) -> NewOrder {
    NewOrder {
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        buyer_id: buyer_id.to_owned(),
        seller_id: product.seller_id.clone(),
        quantity,
        total_cents: product.price_cents.saturating_mul(quantity),
        delivery_mode,
        shipping_address,
    }
}

/// Checkout page for the `/checkout/:id` route. Requires a session.
#[component]
pub fn CheckoutPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let addresses = use_address_book();
    let delivery = expect_context::<RwSignal<DeliveryMode>>();

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    install_unauth_redirect(auth, use_navigate());

    let params = use_params_map();
    let product_id = move || params.read().get("id").unwrap_or_default();
    let product = LocalResource::new(move || {
        let id = product_id();
        async move { crate::net::api::fetch_product(&id).await }
    });

    let quantity = RwSignal::new("1".to_owned());
    let selected_address = RwSignal::new(None::<String>);
    let show_address_form = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_select_address = Callback::new(move |id: String| {
        selected_address.set(Some(id));
    });
    let on_remove_address = Callback::new(move |id: String| {
        addresses.remove(&id);
        if selected_address.get() == Some(id) {
            selected_address.set(None);
        }
    });

    let set_mode = move |mode: DeliveryMode| {
        delivery.set(mode);
        crate::state::delivery::store_preference(mode);
    };

    let on_place_order = move |_| {
        if busy.get() {
            return;
        }
        let Some(Some(listing)) = product.get() else {
            return;
        };
        let Some(buyer) = auth.get().user else {
            return;
        };
        let ordered_quantity = match validate_quantity(&quantity.get(), listing.stock) {
            Ok(quantity) => quantity,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let mode = delivery.get();
        let shipping_address = match mode {
            DeliveryMode::Pickup => None,
            DeliveryMode::Courier => {
                let Some(entry) = selected_address.get().and_then(|id| addresses.get(&id)) else {
                    info.set("Select or add a delivery address.".to_owned());
                    return;
                };
                Some(format_address_line(&entry))
            }
        };
        let order = build_new_order(&listing, &buyer.id, ordered_quantity, mode, shipping_address);
        busy.set(true);
        info.set("Placing order...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_order(&order).await {
                    Ok(_) => navigate("/orders", NavigateOptions::default()),
                    Err(e) => {
                        info.set(format!("Order failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = order;
        }
    };

    view! {
        <div class="checkout-page">
            <h1>"Checkout"</h1>
            <Suspense fallback=move || view! { <p>"Loading product..."</p> }>
                {move || {
                    product
                        .get()
                        .map(|found| match found {
                            Some(listing) => {
                                let line_total = move || {
                                    validate_quantity(&quantity.get(), listing.stock)
                                        .map(|q| format_line_total(listing.price_cents, q))
                                        .unwrap_or_default()
                                };
                                view! {
                                    <div class="checkout-page__summary">
                                        <span class="checkout-page__product">{listing.name.clone()}</span>
                                        <label class="checkout-page__quantity">
                                            "Quantity"
                                            <input
                                                type="number"
                                                min="1"
                                                prop:value=move || quantity.get()
                                                on:input=move |ev| quantity.set(event_target_value(&ev))
                                            />
                                        </label>
                                        <span class="checkout-page__total">{line_total}</span>
                                    </div>
                                }
                                    .into_any()
                            }
                            None => view! { <p class="checkout-page__missing">"Product not found."</p> }
                                .into_any(),
                        })
                }}
            </Suspense>

            <section class="checkout-page__delivery">
                <h2>"Delivery"</h2>
                {[DeliveryMode::Courier, DeliveryMode::Pickup]
                    .into_iter()
                    .map(|mode| {
                        view! {
                            <label class="checkout-page__mode">
                                <input
                                    type="radio"
                                    name="delivery-mode"
                                    prop:checked=move || delivery.get() == mode
                                    on:change=move |_| set_mode(mode)
                                />
                                {mode.label()}
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <Show when=move || delivery.get() == DeliveryMode::Courier>
                <section class="checkout-page__addresses">
                    <h2>"Deliver to"</h2>
                    <Show
                        when=move || !addresses.is_empty()
                        fallback=|| view! { <p>"No saved addresses yet."</p> }
                    >
                        {move || {
                            addresses
                                .entries()
                                .into_iter()
                                .map(|entry| {
                                    let id = entry.id.clone();
                                    view! {
                                        <AddressCard
                                            entry=entry
                                            selected=selected_address.get() == Some(id)
                                            on_select=on_select_address
                                            on_remove=on_remove_address
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                    <button class="btn" on:click=move |_| show_address_form.update(|v| *v = !*v)>
                        "Add address"
                    </button>
                    <Show when=move || show_address_form.get()>
                        <NewAddressForm
                            on_saved=Callback::new(move |id: String| {
                                selected_address.set(Some(id));
                                show_address_form.set(false);
                            })
                        />
                    </Show>
                </section>
            </Show>

            <Show when=move || !info.get().is_empty()>
                <p class="checkout-page__message">{move || info.get()}</p>
            </Show>
            <button
                class="btn btn--primary checkout-page__place"
                disabled=move || busy.get()
                on:click=on_place_order
            >
                "Place order"
            </button>
        </div>
    }
}

/// Inline form collecting a new delivery address.
#[component]
fn NewAddressForm(on_saved: Callback<String>) -> impl IntoView {
    let addresses = use_address_book();
    let label = RwSignal::new(String::new());
    let recipient = RwSignal::new(String::new());
    let line1 = RwSignal::new(String::new());
    let line2 = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let postal_code = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let form_error = RwSignal::new(String::new());

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_new_address(
            &label.get(),
            &recipient.get(),
            &line1.get(),
            &line2.get(),
            &city.get(),
            &postal_code.get(),
            &phone.get(),
        ) {
            Ok(address) => {
                let id = addresses.add(address);
                form_error.set(String::new());
                on_saved.run(id);
            }
            Err(message) => form_error.set(message.to_owned()),
        }
    };

    let text_input = move |placeholder: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="address-form__input"
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <form class="address-form" on:submit=on_save>
            {text_input("Label (e.g. Home)", label)}
            {text_input("Recipient", recipient)}
            {text_input("Address line 1", line1)}
            {text_input("Address line 2 (optional)", line2)}
            {text_input("City", city)}
            {text_input("Postal code", postal_code)}
            {text_input("Phone (optional)", phone)}
            <Show when=move || !form_error.get().is_empty()>
                <p class="address-form__error">{move || form_error.get()}</p>
            </Show>
            <button class="btn btn--primary" type="submit">"Save address"</button>
        </form>
    }
}
