//! Card component for saved addresses in the checkout picker.

#[cfg(test)]
#[path = "address_card_test.rs"]
mod address_card_test;

use leptos::prelude::*;

use stash::address_book::AddressEntry;

/// Render an address as the single line stored on orders, e.g.
/// `"Avery Quinn, 12 Market Lane, Flat 3, Portsmouth PO1 2AB"`.
#[must_use]
pub fn format_address_line(entry: &AddressEntry) -> String {
    let mut parts = vec![entry.recipient.clone(), entry.line1.clone()];
    if let Some(line2) = &entry.line2 {
        parts.push(line2.clone());
    }
    parts.push(format!("{} {}", entry.city, entry.postal_code));
    parts.join(", ")
}

/// A selectable card representing one saved address.
#[component]
pub fn AddressCard(
    entry: AddressEntry,
    #[prop(optional)] selected: bool,
    on_select: Callback<String>,
    on_remove: Callback<String>,
) -> impl IntoView {
    let line = format_address_line(&entry);
    let select_id = entry.id.clone();
    let remove_id = entry.id.clone();

    view! {
        <div
            class="address-card"
            class:address-card--selected=selected
            on:click=move |_| on_select.run(select_id.clone())
        >
            <span class="address-card__label">{entry.label.clone()}</span>
            <span class="address-card__line">{line}</span>
            {entry
                .phone
                .clone()
                .map(|phone| view! { <span class="address-card__phone">{phone}</span> })}
            <button
                class="address-card__remove"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    on_remove.run(remove_id.clone());
                }
                title="Delete address"
                aria-label="Delete address"
            >
                "✕"
            </button>
        </div>
    }
}
