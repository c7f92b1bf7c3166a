//! Registration form. Registering does not sign the user in; on success
//! they are pointed at the login form.

use dioxus::prelude::*;

use api::models::NewUser;
use ui::use_api;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let client = use_api();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let name = name().trim().to_string();
            let email = email().trim().to_string();
            let password = password();

            if name.is_empty() {
                error.set(Some("Please enter your name".to_string()));
                return;
            }
            if email.is_empty() || !email.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if password.len() < 6 {
                error.set(Some("Password must be at least 6 characters".to_string()));
                return;
            }
            if password != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            let profile = NewUser { email, password, name };
            match api::auth::register(&client, &profile).await {
                Ok(message) => {
                    success.set(Some(message));
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    if let Some(message) = success() {
        return rsx! {
            div { class: "auth-page",
                div { class: "card result-card",
                    h2 { "Account created" }
                    p { "{message}" }
                    p { class: "muted", "You can sign in now." }
                    Link { class: "btn btn-primary", to: Route::Login {}, "Go to sign in" }
                }
            }
        };
    }

    rsx! {
        div { class: "auth-page",
            h1 { class: "auth-brand", "EventTickets" }
            h2 { "Create your account" }
            p { class: "muted",
                "Already registered? "
                Link { to: Route::Login {}, "Sign in here" }
            }

            form { class: "auth-form", onsubmit: handle_submit,
                if let Some(message) = error() {
                    div { class: "banner banner-error", p { "{message}" } }
                }

                label { class: "field-label", r#for: "register-name", "Name" }
                input {
                    id: "register-name",
                    class: "field-input",
                    r#type: "text",
                    placeholder: "Your name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                label { class: "field-label", r#for: "register-email", "Email" }
                input {
                    id: "register-email",
                    class: "field-input",
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                label { class: "field-label", r#for: "register-password", "Password" }
                input {
                    id: "register-password",
                    class: "field-input",
                    r#type: "password",
                    placeholder: "At least 6 characters",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                label { class: "field-label", r#for: "register-confirm", "Confirm password" }
                input {
                    id: "register-confirm",
                    class: "field-input",
                    r#type: "password",
                    placeholder: "Repeat your password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Create account" }
                }
            }
        }
    }
}
