//! Aggregate counters and the latest orders.

use dioxus::prelude::*;

use ui::format::{format_datetime, format_price};
use ui::{use_api, ErrorBanner, LoadingIndicator};

#[component]
pub fn AdminDashboard() -> Element {
    let client = use_api();
    let mut stats = use_resource(move || {
        let client = client.clone();
        async move { api::admin::dashboard_stats(&client).await }
    });

    let body = match &*stats.read() {
        Some(Ok(stats)) => {
            let revenue = format_price(stats.total_revenue);
            let recent = stats.recent_orders.clone();
            rsx! {
                div { class: "stat-grid",
                    StatCard { label: "Total events", value: stats.total_events.to_string() }
                    StatCard { label: "Active events", value: stats.active_events.to_string() }
                    StatCard { label: "Users", value: stats.total_users.to_string() }
                    StatCard { label: "Orders", value: stats.total_orders.to_string() }
                    StatCard { label: "Completed orders", value: stats.completed_orders.to_string() }
                    StatCard { label: "Revenue", value: revenue }
                }

                div { class: "card",
                    h3 { "Recent orders" }
                    if recent.is_empty() {
                        p { class: "muted", "No orders yet." }
                    } else {
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Order" }
                                    th { "Customer" }
                                    th { "Placed" }
                                    th { "Total" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                for order in recent {
                                    tr {
                                        td { "#{order.id}" }
                                        td {
                                            "{order.user_name}"
                                            span { class: "muted block", "{order.user_email}" }
                                        }
                                        td { {format_datetime(&order.order_date)} }
                                        td { {format_price(order.total_amount)} }
                                        td {
                                            span { class: "chip chip-{order.status}", "{order.status}" }
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
                message: "Could not load the dashboard. {err}",
                on_retry: move |_| stats.restart(),
            }
        },
        None => rsx! {
            LoadingIndicator { caption: "Loading statistics..." }
        },
    };

    rsx! {
        h1 { "Dashboard" }
        {body}
    }
}

#[component]
fn StatCard(label: String, value: String) -> Element {
    rsx! {
        div { class: "card stat-card",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}
