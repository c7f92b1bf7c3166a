//! Event management: paged table plus the create/edit form.

use dioxus::prelude::*;

use api::models::{EventPayload, TicketPayload};
use ui::format::{format_date_short, format_time};
use ui::{use_api, ErrorBanner, LoadingIndicator, Pager};

use crate::Route;

#[component]
pub fn ManageEvents() -> Element {
    let client = use_api();
    let mut page = use_signal(|| 1u32);
    let mut error = use_signal(|| Option::<String>::None);

    let list_client = client.clone();
    let mut events = use_resource(move || {
        let client = list_client.clone();
        let page = page();
        async move { api::admin::list_events(&client, page, 10).await }
    });

    let delete_client = client.clone();
    let on_delete = EventHandler::new(move |event_id: i64| {
        if !ui::browser::confirm("Delete this event? This cannot be undone.") {
            return;
        }
        let client = delete_client.clone();
        spawn(async move {
            error.set(None);
            match api::admin::delete_event(&client, event_id).await {
                Ok(()) => events.restart(),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    });

    let body = match &*events.read() {
        Some(Ok(listing)) if listing.events.is_empty() => rsx! {
            p { class: "muted", "No events yet. Create the first one." }
        },
        Some(Ok(listing)) => {
            let rows = listing.events.clone();
            let pagination = listing.pagination.clone();
            rsx! {
                div { class: "card",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Event" }
                                th { "When" }
                                th { "Type" }
                                th { "Venue" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for event in rows {
                                tr {
                                    td {
                                        "{event.title}"
                                        if !event.artist_name.is_empty() {
                                            span { class: "muted block", "{event.artist_name}" }
                                        }
                                    }
                                    td {
                                        {format_date_short(&event.event_date)}
                                        " "
                                        {format_time(&event.event_time)}
                                    }
                                    td { "{event.event_type}" }
                                    td { "{event.venue_name}" }
                                    td {
                                        span { class: "chip chip-{event.status}", "{event.status}" }
                                    }
                                    td { class: "row-actions",
                                        Link {
                                            class: "btn btn-outline btn-small",
                                            to: Route::EditEvent { id: event.id },
                                            "Edit"
                                        }
                                        button {
                                            class: "btn btn-danger btn-small",
                                            onclick: move |_| on_delete.call(event.id),
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                    Pager { pagination, on_page: move |next| page.set(next) }
                }
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
        div { class: "admin-header",
            div {
                h1 { "Events" }
                p { class: "muted", "Everything on sale, paused, or past." }
            }
            Link { class: "btn btn-primary", to: Route::NewEvent {}, "New event" }
        }

        if let Some(message) = error() {
            div { class: "banner banner-error", p { "{message}" } }
        }

        {body}
    }
}

#[component]
pub fn NewEvent() -> Element {
    rsx! {
        EventForm { id: None }
    }
}

#[component]
pub fn EditEvent(id: i64) -> Element {
    rsx! {
        EventForm { id: Some(id) }
    }
}

/// One editable ticket-tier row of the form.
#[derive(Clone, Debug, Default, PartialEq)]
struct TicketDraft {
    location: String,
    price: String,
    quantity: String,
}

#[component]
fn EventForm(#[props(!optional)] id: Option<i64>) -> Element {
    let client = use_api();
    let nav = use_navigator();
    let is_edit = id.is_some();

    let lookups_client = client.clone();
    let mut lookups = use_resource(move || {
        let client = lookups_client.clone();
        async move { api::admin::form_lookups(&client).await }
    });

    let existing_client = client.clone();
    let existing = use_resource(move || {
        let client = existing_client.clone();
        async move {
            match id {
                Some(event_id) => api::admin::get_event(&client, event_id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut event_date = use_signal(String::new);
    let mut event_time = use_signal(String::new);
    let mut type_id = use_signal(String::new);
    let mut venue_id = use_signal(String::new);
    let mut artist_id = use_signal(String::new);
    let mut image_url = use_signal(String::new);
    let mut status = use_signal(|| "active".to_string());
    let mut tickets = use_signal(Vec::<TicketDraft>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut loaded = use_signal(|| false);

    // seed the form once the record arrives in edit mode
    use_effect(move || {
        if loaded() {
            return;
        }
        if let Some(Ok(Some(detail))) = &*existing.read() {
            title.set(detail.title.clone());
            description.set(detail.description.clone());
            event_date.set(detail.event_date.clone());
            event_time.set(detail.event_time.clone());
            type_id.set(detail.type_id.to_string());
            venue_id.set(detail.venue_id.to_string());
            artist_id.set(detail.artist_id.to_string());
            image_url.set(detail.image_url.clone().unwrap_or_default());
            if !detail.status.is_empty() {
                status.set(detail.status.clone());
            }
            tickets.set(
                detail
                    .tickets
                    .iter()
                    .map(|tier| TicketDraft {
                        location: tier.location.clone(),
                        price: tier.price.to_string(),
                        quantity: tier.quantity_available.to_string(),
                    })
                    .collect(),
            );
            loaded.set(true);
        }
    });

    let submit_client = client.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = submit_client.clone();
        spawn(async move {
            error.set(None);
            let payload = match build_payload(
                &title(),
                &description(),
                &event_date(),
                &event_time(),
                &type_id(),
                &venue_id(),
                &artist_id(),
                &image_url(),
                &status(),
                &tickets(),
            ) {
                Ok(payload) => payload,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            saving.set(true);
            let result = match id {
                Some(event_id) => api::admin::update_event(&client, event_id, &payload).await,
                None => api::admin::create_event(&client, &payload).await,
            };
            match result {
                Ok(()) => {
                    nav.push(Route::ManageEvents {});
                }
                Err(err) => {
                    saving.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    let heading = if is_edit { "Edit event" } else { "New event" };
    let submit_label = if is_edit { "Save changes" } else { "Create event" };

    let form = match &*lookups.read() {
        Some(Ok((types, venues, artists))) => {
            let types = types.clone();
            let venues = venues.clone();
            let artists = artists.clone();
            rsx! {
                form { class: "card admin-form", onsubmit: handle_submit,
                    if let Some(message) = error() {
                        div { class: "banner banner-error", p { "{message}" } }
                    }

                    label { class: "field-label", "Title" }
                    input {
                        class: "field-input",
                        r#type: "text",
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }

                    label { class: "field-label", "Description" }
                    textarea {
                        class: "field-input",
                        rows: 4,
                        value: description(),
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                    }

                    div { class: "field-row",
                        div {
                            label { class: "field-label", "Date" }
                            input {
                                class: "field-input",
                                r#type: "date",
                                value: event_date(),
                                oninput: move |evt: FormEvent| event_date.set(evt.value()),
                            }
                        }
                        div {
                            label { class: "field-label", "Time" }
                            input {
                                class: "field-input",
                                r#type: "time",
                                value: event_time(),
                                oninput: move |evt: FormEvent| event_time.set(evt.value()),
                            }
                        }
                    }

                    div { class: "field-row",
                        div {
                            label { class: "field-label", "Type" }
                            select {
                                class: "field-input",
                                value: type_id(),
                                onchange: move |evt: FormEvent| type_id.set(evt.value()),
                                option { value: "", "Choose a type" }
                                for entry in types.iter() {
                                    option { value: "{entry.id}", "{entry.name}" }
                                }
                            }
                        }
                        div {
                            label { class: "field-label", "Venue" }
                            select {
                                class: "field-input",
                                value: venue_id(),
                                onchange: move |evt: FormEvent| venue_id.set(evt.value()),
                                option { value: "", "Choose a venue" }
                                for entry in venues.iter() {
                                    option { value: "{entry.id}", "{entry.name}" }
                                }
                            }
                        }
                        div {
                            label { class: "field-label", "Artist" }
                            select {
                                class: "field-input",
                                value: artist_id(),
                                onchange: move |evt: FormEvent| artist_id.set(evt.value()),
                                option { value: "", "Choose an artist" }
                                for entry in artists.iter() {
                                    option { value: "{entry.id}", "{entry.name}" }
                                }
                            }
                        }
                    }

                    div { class: "field-row",
                        div {
                            label { class: "field-label", "Image URL (optional)" }
                            input {
                                class: "field-input",
                                r#type: "url",
                                value: image_url(),
                                oninput: move |evt: FormEvent| image_url.set(evt.value()),
                            }
                        }
                        div {
                            label { class: "field-label", "Status" }
                            select {
                                class: "field-input",
                                value: status(),
                                onchange: move |evt: FormEvent| status.set(evt.value()),
                                option { value: "active", "Active" }
                                option { value: "inactive", "Inactive" }
                            }
                        }
                    }

                    h3 { "Ticket tiers" }
                    for index in 0..tickets().len() {
                        TicketDraftRow { index, tickets }
                    }
                    button {
                        class: "btn btn-outline btn-small",
                        r#type: "button",
                        onclick: move |_| tickets.with_mut(|rows| rows.push(TicketDraft::default())),
                        "Add tier"
                    }

                    div { class: "form-actions",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "{submit_label}" }
                        }
                        Link { class: "btn btn-outline", to: Route::ManageEvents {}, "Cancel" }
                    }
                }
            }
        }
        Some(Err(err)) => rsx! {
            ErrorBanner {
                message: "Could not load the form references. {err}",
                on_retry: move |_| lookups.restart(),
            }
        },
        None => rsx! {
            LoadingIndicator { caption: "Loading form..." }
        },
    };

    rsx! {
        Link { class: "back-link", to: Route::ManageEvents {}, "← All events" }
        h1 { "{heading}" }
        {form}
    }
}

#[component]
fn TicketDraftRow(index: usize, tickets: Signal<Vec<TicketDraft>>) -> Element {
    let mut tickets = tickets;
    let draft = tickets().get(index).cloned().unwrap_or_default();

    rsx! {
        div { class: "field-row ticket-draft",
            input {
                class: "field-input",
                r#type: "text",
                placeholder: "Section (e.g. VIP)",
                value: draft.location,
                oninput: move |evt: FormEvent| tickets.with_mut(|rows| {
                    if let Some(row) = rows.get_mut(index) {
                        row.location = evt.value();
                    }
                }),
            }
            input {
                class: "field-input",
                r#type: "number",
                min: "0",
                step: "0.01",
                placeholder: "Price",
                value: draft.price,
                oninput: move |evt: FormEvent| tickets.with_mut(|rows| {
                    if let Some(row) = rows.get_mut(index) {
                        row.price = evt.value();
                    }
                }),
            }
            input {
                class: "field-input",
                r#type: "number",
                min: "1",
                placeholder: "Quantity",
                value: draft.quantity,
                oninput: move |evt: FormEvent| tickets.with_mut(|rows| {
                    if let Some(row) = rows.get_mut(index) {
                        row.quantity = evt.value();
                    }
                }),
            }
            button {
                class: "btn btn-danger btn-small",
                r#type: "button",
                onclick: move |_| tickets.with_mut(|rows| {
                    if index < rows.len() {
                        rows.remove(index);
                    }
                }),
                "Remove"
            }
        }
    }
}

/// Validate the form state into a payload, or explain what is missing.
fn build_payload(
    title: &str,
    description: &str,
    event_date: &str,
    event_time: &str,
    type_id: &str,
    venue_id: &str,
    artist_id: &str,
    image_url: &str,
    status: &str,
    tickets: &[TicketDraft],
) -> Result<EventPayload, String> {
    if title.trim().is_empty() {
        return Err("Title is required".to_string());
    }
    if description.trim().is_empty() {
        return Err("Description is required".to_string());
    }
    if event_date.is_empty() || event_time.is_empty() {
        return Err("Date and time are required".to_string());
    }
    let type_id: i64 = type_id.parse().map_err(|_| "Choose an event type".to_string())?;
    let venue_id: i64 = venue_id.parse().map_err(|_| "Choose a venue".to_string())?;
    let artist_id: i64 = artist_id.parse().map_err(|_| "Choose an artist".to_string())?;

    let mut tiers = Vec::new();
    for draft in tickets {
        if draft.location.trim().is_empty() && draft.price.is_empty() && draft.quantity.is_empty() {
            continue; // untouched blank row
        }
        let price: f64 = draft
            .price
            .parse()
            .map_err(|_| format!("Invalid price for tier \"{}\"", draft.location))?;
        let quantity: u32 = draft
            .quantity
            .parse()
            .map_err(|_| format!("Invalid quantity for tier \"{}\"", draft.location))?;
        if draft.location.trim().is_empty() {
            return Err("Every tier needs a section name".to_string());
        }
        tiers.push(TicketPayload {
            location: draft.location.trim().to_string(),
            price,
            quantity,
        });
    }

    Ok(EventPayload {
        title: title.trim().to_string(),
        description: description.trim().to_string(),
        event_date: event_date.to_string(),
        event_time: event_time.to_string(),
        type_id,
        venue_id,
        artist_id,
        image_url: if image_url.trim().is_empty() {
            None
        } else {
            Some(image_url.trim().to_string())
        },
        status: status.to_string(),
        tickets: tiers,
    })
}
