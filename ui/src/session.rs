//! Session context and hooks shared by every view.

use api::{make_token_store, ApiClient, ApiConfig, ApiError, Session, SessionState};
use dioxus::prelude::*;

/// Reactive snapshot of the session, provided by [`SessionProvider`].
/// Updates whenever the user signs in, signs out, or is signed out by a
/// 401.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// The application's gateway client, provided by [`SessionProvider`].
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Owns the session for the lifetime of the page.
///
/// Wrap the router with this component. It restores the persisted
/// session, provides the client and the reactive snapshot via context,
/// and installs the single 401 observer: any unauthorized response
/// anywhere clears the session and lands the user on the login view.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_hook(|| Session::new(make_token_store()));
    let client = use_hook(|| ApiClient::new(ApiConfig::default(), session.clone()));

    let state = use_context_provider(|| Signal::new(session.snapshot()));
    use_context_provider(|| client.clone());

    use_hook(|| {
        let session = session.clone();
        client.set_unauthorized_observer(move || {
            session.clear();
            let mut state = state;
            state.set(session.snapshot());
            crate::browser::hard_redirect("/login");
        });
    });

    rsx! {
        {children}
    }
}

/// Sign in and refresh the reactive snapshot.
pub async fn sign_in(
    client: &ApiClient,
    state: Signal<SessionState>,
    email: &str,
    password: &str,
) -> Result<api::models::User, ApiError> {
    let result = api::auth::login(client, email, password).await;
    let mut state = state;
    state.set(client.session().snapshot());
    result
}

/// Sign out unconditionally and refresh the reactive snapshot.
pub fn sign_out(client: &ApiClient, state: Signal<SessionState>) {
    api::auth::logout(client);
    let mut state = state;
    state.set(client.session().snapshot());
}

/// Guard-side verification.
///
/// Without a token this settles to `false` immediately and no network
/// call is made. Otherwise the token is verified against the backend;
/// any failure has already cleared the session by the time this returns.
/// The snapshot is refreshed either way.
pub async fn ensure_verified(client: &ApiClient, state: Signal<SessionState>) -> bool {
    let verified = if client.session().token().is_none() {
        false
    } else {
        api::auth::verify_token(client).await.is_ok()
    };
    let mut state = state;
    state.set(client.session().snapshot());
    verified
}
