//! The cart: items, server-computed total, and checkout hand-off.

use dioxus::prelude::*;

use api::models::CartItem;
use ui::format::{format_date_short, format_price, format_time};
use ui::{use_api, EmptyState, ErrorBanner, LoadingIndicator};

use crate::Route;

/// Service fee shown next to the subtotal. Display only — the charge
/// itself is computed by the backend at checkout.
const SERVICE_FEE_RATE: f64 = 0.05;

#[component]
pub fn Cart() -> Element {
    let client = use_api();

    let resource_client = client.clone();
    let mut cart = use_resource(move || {
        let client = resource_client.clone();
        async move { api::cart::fetch_cart(&client).await }
    });

    let mut error = use_signal(|| Option::<String>::None);
    let mut checking_out = use_signal(|| false);

    let remove_client = client.clone();
    let on_remove = EventHandler::new(move |item_id: i64| {
        let client = remove_client.clone();
        spawn(async move {
            error.set(None);
            match api::cart::remove_item(&client, item_id).await {
                Ok(()) => cart.restart(),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    });

    let checkout_client = client.clone();
    let on_checkout = move |_| {
        let client = checkout_client.clone();
        spawn(async move {
            let current = match &*cart.read() {
                Some(Ok(current)) => current.clone(),
                _ => return,
            };
            error.set(None);
            checking_out.set(true);
            match api::cart::begin_checkout(&client, &current).await {
                Ok(url) => {
                    // hand the buyer to the provider-hosted checkout page
                    ui::browser::hard_redirect(&url);
                }
                Err(err) => {
                    checking_out.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    let body = match &*cart.read() {
        Some(Ok(current)) if current.items.is_empty() => rsx! {
            EmptyState {
                title: "Your cart is empty",
                detail: "Browse our events and find the one for you.",
                action: rsx! {
                    Link { class: "btn btn-primary", to: Route::Home {}, "Explore events" }
                },
            }
        },
        Some(Ok(current)) => {
            let items = current.items.clone();
            let count = items.len();
            let subtotal = format_price(current.total);
            let fee = format_price(current.total * SERVICE_FEE_RATE);
            let grand = format_price(current.total * (1.0 + SERVICE_FEE_RATE));
            rsx! {
                div { class: "cart-layout",
                    div { class: "card cart-items",
                        h2 { "Items in your cart ({count})" }
                        for item in items {
                            CartLine { item, on_remove }
                        }
                    }
                    aside { class: "card cart-summary",
                        h3 { "Order summary" }
                        div { class: "totals-row",
                            span { "Subtotal" }
                            span { "{subtotal}" }
                        }
                        div { class: "totals-row",
                            span { "Service fee" }
                            span { "{fee}" }
                        }
                        div { class: "totals-row totals-grand",
                            span { "Total" }
                            span { "{grand}" }
                        }
                        button {
                            class: "btn btn-primary btn-block",
                            disabled: checking_out(),
                            onclick: on_checkout,
                            if checking_out() { "Redirecting..." } else { "Proceed to payment" }
                        }
                        p { class: "muted", "Secure payment via PayPal" }
                    }
                }
            }
        }
        Some(Err(err)) => rsx! {
            ErrorBanner {
                message: "Could not load your cart. {err}",
                on_retry: move |_| cart.restart(),
            }
        },
        None => rsx! {
            LoadingIndicator { caption: "Loading your cart..." }
        },
    };

    rsx! {
        div { class: "container",
            Link { class: "back-link", to: Route::Home {}, "← Keep browsing" }
            h1 { "Your cart" }

            if let Some(message) = error() {
                div { class: "banner banner-error", p { "{message}" } }
            }

            {body}
        }
    }
}

#[component]
fn CartLine(item: CartItem, on_remove: EventHandler<i64>) -> Element {
    let date = format_date_short(&item.event_date);
    let time = format_time(&item.event_time);
    let unit = format_price(item.price);
    let line_total = format_price(item.price * f64::from(item.quantity));
    let item_id = item.id;

    rsx! {
        div { class: "cart-line",
            div { class: "cart-line-info",
                h3 { "{item.event_title}" }
                p { class: "cart-line-meta", "{date} · {time} · {item.venue_name}" }
                p { class: "cart-line-meta", "{item.location} · quantity {item.quantity}" }
            }
            div { class: "cart-line-amounts",
                span { class: "muted", "{unit} × {item.quantity}" }
                span { class: "cart-line-total", "{line_total}" }
            }
            button {
                class: "cart-line-remove",
                title: "Remove from cart",
                onclick: move |_| on_remove.call(item_id),
                "Remove"
            }
        }
    }
}
