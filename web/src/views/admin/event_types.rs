//! Event type management: list plus an inline create/edit form.

use dioxus::prelude::*;

use api::models::EventTypePayload;
use ui::{use_api, ErrorBanner, LoadingIndicator};

#[component]
pub fn ManageEventTypes() -> Element {
    let client = use_api();

    let list_client = client.clone();
    let mut list = use_resource(move || {
        let client = list_client.clone();
        async move { api::admin::list_event_types(&client).await }
    });

    // None = creating, Some(id) = editing that row
    let mut editing = use_signal(|| Option::<i64>::None);
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let mut reset_form = move || {
        editing.set(None);
        name.set(String::new());
        description.set(String::new());
    };

    let save_client = client.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = save_client.clone();
        spawn(async move {
            error.set(None);
            let payload = EventTypePayload {
                name: name().trim().to_string(),
                description: description().trim().to_string(),
            };
            if payload.name.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            saving.set(true);
            let result = match editing() {
                Some(type_id) => api::admin::update_event_type(&client, type_id, &payload).await,
                None => api::admin::create_event_type(&client, &payload).await,
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
    let on_delete = EventHandler::new(move |type_id: i64| {
        if !ui::browser::confirm("Delete this event type?") {
            return;
        }
        let client = delete_client.clone();
        spawn(async move {
            error.set(None);
            match api::admin::delete_event_type(&client, type_id).await {
                Ok(()) => {
                    if editing() == Some(type_id) {
                        reset_form();
                    }
                    list.restart();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    });

    let on_edit = EventHandler::new(move |entry: api::models::EventType| {
        editing.set(Some(entry.id));
        name.set(entry.name);
        description.set(entry.description.unwrap_or_default());
    });

    let table = match &*list.read() {
        Some(Ok(entries)) if entries.is_empty() => rsx! {
            p { class: "muted", "No event types yet." }
        },
        Some(Ok(entries)) => {
            let rows = entries.clone();
            rsx! {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Description" }
                            th { "" }
                        }
                    }
                    tbody {
                        for entry in rows {
                            tr {
                                td { "{entry.name}" }
                                td { class: "muted",
                                    {entry.description.clone().unwrap_or_default()}
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
                message: "Could not load event types. {err}",
                on_retry: move |_| list.restart(),
            }
        },
        None => rsx! {
            LoadingIndicator { caption: "Loading event types..." }
        },
    };

    let form_title = if editing().is_some() { "Edit event type" } else { "New event type" };

    rsx! {
        h1 { "Event types" }

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
                    placeholder: "Concert, Theater, ...",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                label { class: "field-label", "Description (optional)" }
                textarea {
                    class: "field-input",
                    rows: 3,
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
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
