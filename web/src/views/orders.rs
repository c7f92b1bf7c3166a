//! Order history.

use dioxus::prelude::*;

use ui::format::{format_date_short, format_datetime, format_price, format_time};
use ui::{use_api, EmptyState, ErrorBanner, LoadingIndicator};

use crate::Route;

#[component]
pub fn Orders() -> Element {
    let client = use_api();
    let mut orders = use_resource(move || {
        let client = client.clone();
        async move { api::orders::my_orders(&client).await }
    });

    let body = match &*orders.read() {
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState {
                title: "No orders yet",
                detail: "Tickets you buy will show up here.",
                action: rsx! {
                    Link { class: "btn btn-primary", to: Route::Home {}, "Find an event" }
                },
            }
        },
        Some(Ok(list)) => {
            let rows = list.clone();
            rsx! {
                div { class: "card",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Order" }
                                th { "Placed" }
                                th { "Tickets" }
                                th { "Total" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for order in rows {
                                tr {
                                    td { "#{order.id}" }
                                    td { {format_datetime(&order.order_date)} }
                                    td { "{order.total_tickets}" }
                                    td { {format_price(order.total_amount)} }
                                    td {
                                        span { class: "chip chip-{order.status}", "{order.status}" }
                                    }
                                    td {
                                        Link {
                                            class: "btn btn-outline btn-small",
                                            to: Route::OrderDetail { id: order.id },
                                            "Details"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(err)) => rsx! {
            ErrorBanner {
                message: "Could not load your orders. {err}",
                on_retry: move |_| orders.restart(),
            }
        },
        None => rsx! {
            LoadingIndicator { caption: "Loading your orders..." }
        },
    };

    rsx! {
        div { class: "container",
            h1 { "My orders" }
            {body}
        }
    }
}

#[component]
pub fn OrderDetail(id: i64) -> Element {
    let client = use_api();
    let mut order = use_resource(move || {
        let client = client.clone();
        async move { api::orders::order_details(&client, id).await }
    });

    let body = match &*order.read() {
        Some(Ok(record)) => {
            let placed = format_datetime(&record.order_date);
            let total = format_price(record.total_amount);
            let items = record.items.clone();
            let status = record.status.clone();
            rsx! {
                div { class: "card",
                    div { class: "order-header",
                        div {
                            h2 { "Order #{record.id}" }
                            p { class: "muted", "Placed {placed}" }
                        }
                        span { class: "chip chip-{status}", "{status}" }
                    }
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Event" }
                                th { "When" }
                                th { "Section" }
                                th { "Qty" }
                                th { "Price" }
                            }
                        }
                        tbody {
                            for item in items {
                                tr {
                                    td {
                                        "{item.event_title}"
                                        span { class: "muted block", "{item.venue_name}" }
                                    }
                                    td {
                                        {format_date_short(&item.event_date)}
                                        " "
                                        {format_time(&item.event_time)}
                                    }
                                    td { "{item.location}" }
                                    td { "{item.quantity}" }
                                    td { {format_price(item.price)} }
                                }
                            }
                        }
                    }
                    div { class: "totals-row totals-grand order-total",
                        span { "Total" }
                        span { "{total}" }
                    }
                }
            }
        }
        Some(Err(err)) => rsx! {
            ErrorBanner {
                message: "Could not load this order. {err}",
                on_retry: move |_| order.restart(),
            }
        },
        None => rsx! {
            LoadingIndicator { caption: "Loading order..." }
        },
    };

    rsx! {
        div { class: "container",
            Link { class: "back-link", to: Route::Orders {}, "← All orders" }
            {body}
        }
    }
}
