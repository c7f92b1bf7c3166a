//! Event detail page with tier selection and add-to-cart.

use dioxus::prelude::*;

use api::cart::TicketSelection;
use api::models::EventDetail as EventRecord;
use ui::format::{format_date_long, format_price, format_time};
use ui::{use_api, use_session, ErrorBanner, LoadingIndicator, NoticeBanner, QuantityPicker};

use crate::Route;

#[component]
pub fn EventDetails(id: i64) -> Element {
    let client = use_api();
    let session = use_session();
    let nav = use_navigator();

    let resource_client = client.clone();
    let mut event = use_resource(move || {
        let client = resource_client.clone();
        async move { api::events::event_details(&client, id).await }
    });

    let mut selection = use_signal(TicketSelection::new);
    let mut submitting = use_signal(|| false);
    // (is_success, text) of the last submission attempt
    let mut notice = use_signal(|| Option::<(bool, String)>::None);

    let submit_client = client.clone();
    let submit = move |buy_now: bool| {
        let client = submit_client.clone();
        spawn(async move {
            if !client.session().is_authenticated() {
                nav.push(Route::Login {});
                return;
            }
            let picks = selection();
            if picks.total_tickets() == 0 {
                notice.set(Some((false, "Select at least one ticket".to_string())));
                return;
            }
            notice.set(None);
            submitting.set(true);
            let report = api::cart::submit_selection(&client, &picks).await;
            submitting.set(false);
            if report.is_success() {
                selection.set(TicketSelection::new());
                notice.set(Some((true, "Tickets added to your cart".to_string())));
            } else if let Some(message) = report.error_message() {
                notice.set(Some((false, message)));
            }
            // the selection had tickets, so "buy now" proceeds to the cart
            if buy_now {
                nav.push(Route::Cart {});
            }
        });
    };

    let body = match &*event.read() {
        Some(Ok(record)) => {
            let record = record.clone();
            rsx! {
                EventBody {
                    record,
                    selection,
                    submitting: submitting(),
                    notice: notice(),
                    authenticated: session().is_authenticated(),
                    on_submit: submit,
                }
            }
        }
        Some(Err(err)) => rsx! {
            div { class: "container",
                ErrorBanner {
                    message: "Could not load this event. {err}",
                    on_retry: move |_| event.restart(),
                }
                Link { class: "btn btn-outline", to: Route::Home {}, "Back to events" }
            }
        },
        None => rsx! {
            LoadingIndicator { caption: "Loading event..." }
        },
    };
    body
}

#[component]
fn EventBody(
    record: EventRecord,
    selection: Signal<TicketSelection>,
    submitting: bool,
    notice: Option<(bool, String)>,
    authenticated: bool,
    on_submit: EventHandler<bool>,
) -> Element {
    let date = format_date_long(&record.event_date);
    let time = format_time(&record.event_time);
    let total_tickets = selection().total_tickets();
    let total_price = format_price(selection().total_price(&record.tickets));

    let notice_banner = match notice {
        Some((true, message)) => rsx! {
            NoticeBanner { message }
        },
        Some((false, message)) => rsx! {
            div { class: "banner banner-error", p { "{message}" } }
        },
        None => rsx! {},
    };

    rsx! {
        div { class: "container",
            Link { class: "back-link", to: Route::Home {}, "← Back to events" }

            div { class: "detail-layout",
                div { class: "detail-main",
                    div { class: "detail-media",
                        if let Some(url) = record.image_url.clone() {
                            img { src: "{url}", alt: "{record.title}" }
                        } else {
                            span { class: "event-card-placeholder", "{record.event_type}" }
                        }
                    }

                    div { class: "card",
                        div { class: "detail-header",
                            span { class: "chip", "{record.event_type}" }
                            div { class: "detail-when",
                                span { class: "detail-date", "{date}" }
                                span { class: "detail-time", "{time}" }
                            }
                        }
                        h1 { "{record.title}" }
                        if !record.artist_name.is_empty() {
                            p { class: "detail-artist", "{record.artist_name}" }
                        }
                        p { class: "detail-venue",
                            "{record.venue_name} · {record.venue_address}, {record.venue_city}"
                        }
                        if !record.description.is_empty() {
                            h3 { "About this event" }
                            p { class: "detail-description", "{record.description}" }
                        }
                    }

                    if let Some(bio) = record.artist_bio.clone() {
                        div { class: "card",
                            h3 { "About the artist" }
                            p { class: "detail-description", "{bio}" }
                        }
                    }
                }

                aside { class: "detail-side",
                    div { class: "card ticket-panel",
                        h3 { "Select tickets" }
                        if record.tickets.is_empty() {
                            p { class: "muted", "No tickets are available for this event." }
                        } else {
                            for tier in record.tickets.clone() {
                                TierRow { tier, selection }
                            }

                            div { class: "ticket-totals",
                                div { class: "totals-row",
                                    span { "Tickets" }
                                    span { "{total_tickets}" }
                                }
                                div { class: "totals-row totals-grand",
                                    span { "Total" }
                                    span { "{total_price}" }
                                }
                            }

                            {notice_banner}

                            button {
                                class: "btn btn-primary btn-block",
                                disabled: submitting || total_tickets == 0,
                                onclick: move |_| on_submit.call(true),
                                if submitting { "Processing..." } else { "Buy now" }
                            }
                            button {
                                class: "btn btn-outline btn-block",
                                disabled: submitting || total_tickets == 0,
                                onclick: move |_| on_submit.call(false),
                                if submitting { "Adding..." } else { "Add to cart" }
                            }

                            if !authenticated {
                                p { class: "muted",
                                    Link { to: Route::Login {}, "Sign in" }
                                    " to buy tickets"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TierRow(tier: api::models::TicketTier, selection: Signal<TicketSelection>) -> Element {
    let mut selection = selection;
    let tier_id = tier.id;
    let available = tier.available;
    let price = format_price(tier.price);
    let quantity = selection().quantity(tier_id);

    rsx! {
        div { class: "tier-row",
            div { class: "tier-info",
                span { class: "tier-location", "{tier.location}" }
                span { class: "tier-price", "{price}" }
                span { class: "tier-available", "{available} available" }
            }
            QuantityPicker {
                quantity,
                available,
                on_increment: move |_| selection.with_mut(|s| s.increment(tier_id, available)),
                on_decrement: move |_| selection.with_mut(|s| s.decrement(tier_id)),
            }
        }
    }
}
