//! Venue management.

use dioxus::prelude::*;

use api::models::VenuePayload;
use ui::{use_api, ErrorBanner, LoadingIndicator};

#[component]
pub fn ManageVenues() -> Element {
    let client = use_api();

    let list_client = client.clone();
    let mut list = use_resource(move || {
        let client = list_client.clone();
        async move { api::admin::list_venues(&client).await }
    });

    let mut editing = use_signal(|| Option::<i64>::None);
    let mut name = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut capacity = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let mut reset_form = move || {
        editing.set(None);
        name.set(String::new());
        address.set(String::new());
        city.set(String::new());
        capacity.set(String::new());
    };

    let save_client = client.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = save_client.clone();
        spawn(async move {
            error.set(None);
            let parsed_capacity = match capacity().trim() {
                "" => None,
                raw => match raw.parse::<u32>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        error.set(Some("Capacity must be a number".to_string()));
                        return;
                    }
                },
            };
            let payload = VenuePayload {
                name: name().trim().to_string(),
                address: address().trim().to_string(),
                city: city().trim().to_string(),
                capacity: parsed_capacity,
            };
            if payload.name.is_empty() || payload.address.is_empty() || payload.city.is_empty() {
                error.set(Some("Name, address and city are required".to_string()));
                return;
            }
            saving.set(true);
            let result = match editing() {
                Some(venue_id) => api::admin::update_venue(&client, venue_id, &payload).await,
                None => api::admin::create_venue(&client, &payload).await,
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    reset_form();
                    list.restart();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let delete_client = client.clone();
    let on_delete = EventHandler::new(move |venue_id: i64| {
        if !ui::browser::confirm("Delete this venue?") {
            return;
        }
        let client = delete_client.clone();
        spawn(async move {
            error.set(None);
            match api::admin::delete_venue(&client, venue_id).await {
                Ok(()) => {
                    if editing() == Some(venue_id) {
                        reset_form();
                    }
                    list.restart();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    });

    let on_edit = EventHandler::new(move |entry: api::models::Venue| {
        editing.set(Some(entry.id));
        name.set(entry.name);
        address.set(entry.address);
        city.set(entry.city);
        capacity.set(entry.capacity.map(|value| value.to_string()).unwrap_or_default());
    });

    let table = match &*list.read() {
        Some(Ok(entries)) if entries.is_empty() => rsx! {
            p { class: "muted", "No venues yet." }
        },
        Some(Ok(entries)) => {
            let rows = entries.clone();
            rsx! {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Address" }
                            th { "City" }
                            th { "Capacity" }
                            th { "" }
                        }
                    }
                    tbody {
                        for entry in rows {
                            tr {
                                td { "{entry.name}" }
                                td { class: "muted", "{entry.address}" }
                                td { "{entry.city}" }
                                td {
                                    {entry.capacity.map(|value| value.to_string()).unwrap_or_else(|| "—".to_string())}
                                }
                                td { class: "row-actions",
                                    button {
                                        class: "btn btn-outline btn-small",
                                        onclick: {
                                            let entry = entry.clone();
                                            move |_| on_edit.call(entry.clone())
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-danger btn-small",
                                        onclick: move |_| on_delete.call(entry.id),
                                        "Delete"
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
                message: "Could not load venues. {err}",
                on_retry: move |_| list.restart(),
            }
        },
        None => rsx! {
            LoadingIndicator { caption: "Loading venues..." }
        },
    };

    let form_title = if editing().is_some() { "Edit venue" } else { "New venue" };

    rsx! {
        h1 { "Venues" }

        if let Some(message) = error() {
            div { class: "banner banner-error", p { "{message}" } }
        }

        div { class: "admin-split",
            div { class: "card", {table} }

            form { class: "card admin-form", onsubmit: handle_submit,
                h3 { "{form_title}" }

                label { class: "field-label", "Name" }
                input {
                    class: "field-input",
                    r#type: "text",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                label { class: "field-label", "Address" }
                input {
                    class: "field-input",
                    r#type: "text",
                    value: address(),
                    oninput: move |evt: FormEvent| address.set(evt.value()),
                }

                label { class: "field-label", "City" }
                input {
                    class: "field-input",
                    r#type: "text",
                    value: city(),
                    oninput: move |evt: FormEvent| city.set(evt.value()),
                }

                label { class: "field-label", "Capacity (optional)" }
                input {
                    class: "field-input",
                    r#type: "number",
                    min: "1",
                    value: capacity(),
                    oninput: move |evt: FormEvent| capacity.set(evt.value()),
                }

                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving(),
                        if editing().is_some() { "Save changes" } else { "Create" }
                    }
                    if editing().is_some() {
                        button {
                            class: "btn btn-outline",
                            r#type: "button",
                            onclick: move |_| reset_form(),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
