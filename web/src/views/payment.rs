//! Payment provider return legs.
//!
//! The success leg reads the provider's callback parameters from the
//! return URL and issues exactly one execution call when both are
//! present; anything less is terminal for this navigation and the user
//! goes back to the cart. The cancel leg is purely informational and
//! never touches the network.

use dioxus::prelude::*;

use api::cart::PaymentCallback;
use ui::{use_api, LoadingIndicator};

use crate::Route;

#[derive(Clone, PartialEq)]
enum PaymentPhase {
    Processing,
    Completed,
    Failed(String),
}

#[component]
pub fn PaymentSuccess() -> Element {
    let client = use_api();
    let mut phase = use_signal(|| PaymentPhase::Processing);

    let _execution = use_resource(move || {
        let client = client.clone();
        async move {
            match PaymentCallback::from_query(&ui::browser::current_query()) {
                Some(callback) => match api::cart::execute_payment(&client, &callback).await {
                    Ok(_) => phase.set(PaymentPhase::Completed),
                    Err(err) => phase.set(PaymentPhase::Failed(err.to_string())),
                },
                None => {
                    phase.set(PaymentPhase::Failed("Invalid payment parameters".to_string()));
                }
            }
        }
    });

    match phase() {
        PaymentPhase::Processing => rsx! {
            LoadingIndicator { caption: "Processing your payment..." }
        },
        PaymentPhase::Completed => rsx! {
            div { class: "result-page",
                div { class: "card result-card",
                    div { class: "result-icon result-success", "✓" }
                    h2 { "Payment complete" }
                    p { "Your purchase went through. Your tickets are on their way by email." }
                    Link { class: "btn btn-primary btn-block", to: Route::Orders {}, "View my orders" }
                    Link { class: "btn btn-outline btn-block", to: Route::Home {}, "Back to events" }
                }
            }
        },
        PaymentPhase::Failed(message) => rsx! {
            div { class: "result-page",
                div { class: "card result-card",
                    div { class: "result-icon result-failure", "✕" }
                    h2 { "Payment failed" }
                    p { "{message}" }
                    Link { class: "btn btn-primary btn-block", to: Route::Cart {}, "Back to cart" }
                }
            }
        },
    }
}

#[component]
pub fn PaymentCancel() -> Element {
    rsx! {
        div { class: "result-page",
            div { class: "card result-card",
                div { class: "result-icon result-warning", "!" }
                h2 { "Payment cancelled" }
                p { "You cancelled the payment. Your items are still in the cart." }
                Link { class: "btn btn-primary btn-block", to: Route::Cart {}, "Back to cart" }
                Link { class: "btn btn-outline btn-block", to: Route::Home {}, "Keep browsing" }
            }
        }
    }
}
