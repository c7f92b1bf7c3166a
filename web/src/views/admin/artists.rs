//! Artist management.

use dioxus::prelude::*;

use api::models::ArtistPayload;
use ui::{use_api, ErrorBanner, LoadingIndicator};

#[component]
pub fn ManageArtists() -> Element {
    let client = use_api();

    let list_client = client.clone();
    let mut list = use_resource(move || {
        let client = list_client.clone();
        async move { api::admin::list_artists(&client).await }
    });

    let mut editing = use_signal(|| Option::<i64>::None);
    let mut name = use_signal(String::new);
    let mut genre = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let mut reset_form = move || {
        editing.set(None);
        name.set(String::new());
        genre.set(String::new());
        bio.set(String::new());
    };

    let save_client = client.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = save_client.clone();
        spawn(async move {
            error.set(None);
            let payload = ArtistPayload {
                name: name().trim().to_string(),
                genre: genre().trim().to_string(),
                bio: bio().trim().to_string(),
            };
            if payload.name.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            saving.set(true);
            let result = match editing() {
                Some(artist_id) => api::admin::update_artist(&client, artist_id, &payload).await,
                None => api::admin::create_artist(&client, &payload).await,
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
    let on_delete = EventHandler::new(move |artist_id: i64| {
        if !ui::browser::confirm("Delete this artist?") {
            return;
        }
        let client = delete_client.clone();
        spawn(async move {
            error.set(None);
            match api::admin::delete_artist(&client, artist_id).await {
                Ok(()) => {
                    if editing() == Some(artist_id) {
                        reset_form();
                    }
                    list.restart();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    });

    let on_edit = EventHandler::new(move |entry: api::models::Artist| {
        editing.set(Some(entry.id));
        name.set(entry.name);
        genre.set(entry.genre.unwrap_or_default());
        bio.set(entry.bio.unwrap_or_default());
    });

    let table = match &*list.read() {
        Some(Ok(entries)) if entries.is_empty() => rsx! {
            p { class: "muted", "No artists yet." }
        },
        Some(Ok(entries)) => {
            let rows = entries.clone();
            rsx! {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Genre" }
                            th { "" }
                        }
                    }
                    tbody {
                        for entry in rows {
                            tr {
                                td { "{entry.name}" }
                                td { class: "muted",
                                    {entry.genre.clone().unwrap_or_default()}
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
                message: "Could not load artists. {err}",
                on_retry: move |_| list.restart(),
            }
        },
        None => rsx! {
            LoadingIndicator { caption: "Loading artists..." }
        },
    };

    let form_title = if editing().is_some() { "Edit artist" } else { "New artist" };

    rsx! {
        h1 { "Artists" }

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

                label { class: "field-label", "Genre (optional)" }
                input {
                    class: "field-input",
                    r#type: "text",
                    placeholder: "Rock, Jazz, ...",
                    value: genre(),
                    oninput: move |evt: FormEvent| genre.set(evt.value()),
                }

                label { class: "field-label", "Bio (optional)" }
                textarea {
                    class: "field-input",
                    rows: 4,
                    value: bio(),
                    oninput: move |evt: FormEvent| bio.set(evt.value()),
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
