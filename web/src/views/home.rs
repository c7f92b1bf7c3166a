//! Public event grid with search, filters, and pagination.

use dioxus::prelude::*;

use api::events::{EventFilters, EventQuery};
use api::models::{EventSummary, EventType, Venue};
use ui::format::{format_date_short, format_price, format_time};
use ui::{use_api, EmptyState, ErrorBanner, LoadingIndicator, Pager};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let client = use_api();
    let mut query = use_signal(EventQuery::default);

    let lookup_client = client.clone();
    let lookups = use_resource(move || {
        let client = lookup_client.clone();
        async move { api::events::filter_lookups(&client).await }
    });

    let mut events = use_resource(move || {
        let client = client.clone();
        let query = query();
        async move { api::events::list_events(&client, &query).await }
    });

    let on_search = move |filters: EventFilters| {
        let mut next = query();
        next.filters = filters;
        next.page = 1;
        query.set(next);
    };

    let on_page = move |page: u32| {
        let mut next = query();
        next.page = page;
        query.set(next);
        ui::browser::scroll_to_top();
    };

    let (event_types, venues) = match &*lookups.read() {
        Some((types, venues)) => (types.clone(), venues.clone()),
        None => (Vec::new(), Vec::new()),
    };

    let listing = match &*events.read() {
        Some(Ok(page)) if page.events.is_empty() => rsx! {
            EmptyState {
                title: "No events found",
                detail: "Try different keywords or clear the filters.",
            }
        },
        Some(Ok(page)) => {
            let events = page.events.clone();
            let pagination = page.pagination.clone();
            rsx! {
                div { class: "event-grid",
                    for event in events {
                        EventCard { event }
                    }
                }
                Pager { pagination, on_page }
            }
        }
        Some(Err(err)) => rsx! {
            ErrorBanner {
                message: "Could not load events. {err}",
                on_retry: move |_| events.restart(),
            }
        },
        None => rsx! {
            LoadingIndicator { caption: "Loading events..." }
        },
    };

    rsx! {
        section { class: "hero",
            h1 { "Live events, one ticket away" }
            p { "Concerts, theater, sports and more. Browse what's on near you." }
        }

        div { class: "container",
            SearchBar { event_types, venues, on_search }
            {listing}
        }
    }
}

#[component]
fn SearchBar(
    event_types: Vec<EventType>,
    venues: Vec<Venue>,
    on_search: EventHandler<EventFilters>,
) -> Element {
    let mut search = use_signal(String::new);
    let mut event_type = use_signal(String::new);
    let mut venue = use_signal(String::new);
    let mut date = use_signal(String::new);

    let apply = move || {
        on_search.call(EventFilters {
            search: search().trim().to_string(),
            event_type: event_type(),
            venue: venue(),
            date: date(),
        });
    };

    let clear = move |_| {
        search.set(String::new());
        event_type.set(String::new());
        venue.set(String::new());
        date.set(String::new());
        on_search.call(EventFilters::default());
    };

    rsx! {
        div { class: "search-bar",
            input {
                class: "search-input",
                r#type: "text",
                placeholder: "Search events, artists, venues...",
                value: search(),
                oninput: move |evt: FormEvent| search.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        apply();
                    }
                },
            }
            select {
                class: "search-select",
                value: event_type(),
                onchange: move |evt: FormEvent| event_type.set(evt.value()),
                option { value: "", "All types" }
                for entry in event_types.iter() {
                    option { value: "{entry.id}", "{entry.name}" }
                }
            }
            select {
                class: "search-select",
                value: venue(),
                onchange: move |evt: FormEvent| venue.set(evt.value()),
                option { value: "", "All venues" }
                for entry in venues.iter() {
                    option { value: "{entry.id}", "{entry.name}" }
                }
            }
            input {
                class: "search-select",
                r#type: "date",
                value: date(),
                oninput: move |evt: FormEvent| date.set(evt.value()),
            }
            button { class: "btn btn-primary", onclick: move |_| apply(), "Search" }
            button { class: "btn btn-outline", onclick: clear, "Clear" }
        }
    }
}

#[component]
fn EventCard(event: EventSummary) -> Element {
    let date = format_date_short(&event.event_date);
    let time = format_time(&event.event_time);
    let price = if (event.min_price - event.max_price).abs() < f64::EPSILON {
        format_price(event.min_price)
    } else {
        format!("From {}", format_price(event.min_price))
    };

    rsx! {
        Link { class: "event-card", to: Route::EventDetails { id: event.id },
            div { class: "event-card-media",
                if let Some(url) = event.image_url.clone() {
                    img { src: "{url}", alt: "{event.title}" }
                } else {
                    span { class: "event-card-placeholder", "{event.event_type}" }
                }
            }
            div { class: "event-card-body",
                span { class: "chip", "{event.event_type}" }
                h3 { "{event.title}" }
                p { class: "event-card-meta", "{date} · {time}" }
                p { class: "event-card-meta", "{event.venue_name}, {event.venue_city}" }
                if !event.artist_name.is_empty() {
                    p { class: "event-card-artist", "{event.artist_name}" }
                }
                p { class: "event-card-price", "{price}" }
            }
        }
    }
}
