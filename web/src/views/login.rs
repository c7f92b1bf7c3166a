//! Login form.

use dioxus::prelude::*;

use ui::{use_api, use_session};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let client = use_api();
    let session = use_session();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let email = email().trim().to_string();
            let password = password();

            if email.is_empty() || password.is_empty() {
                error.set(Some("Please fill in all required fields".to_string()));
                return;
            }
            if !email.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if password.len() < 6 {
                error.set(Some("Password must be at least 6 characters".to_string()));
                return;
            }

            loading.set(true);
            match ui::session::sign_in(&client, session, &email, &password).await {
                Ok(_) => {
                    nav.push(Route::Home {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            h1 { class: "auth-brand", "EventTickets" }
            h2 { "Sign in to your account" }
            p { class: "muted",
                "No account yet? "
                Link { to: Route::Register {}, "Create one here" }
            }

            form { class: "auth-form", onsubmit: handle_submit,
                if let Some(message) = error() {
                    div { class: "banner banner-error", p { "{message}" } }
                }

                label { class: "field-label", r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    class: "field-input",
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                label { class: "field-label", r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    class: "field-input",
                    r#type: "password",
                    placeholder: "Your password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
