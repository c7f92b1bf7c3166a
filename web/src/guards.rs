//! Guard layout components.
//!
//! Each guarded navigation walks `loading → allowed | redirected`. The
//! protected and admin guards verify the token on mount before settling;
//! the decision is final for that navigation attempt.

use dioxus::prelude::*;

use ui::guard::{evaluate, GuardDecision, GuardPolicy};
use ui::{use_api, use_session, LoadingIndicator};

use crate::Route;

/// Login/register wrapper: signed-in visitors have no business here and
/// are bounced home.
#[component]
pub fn GuestGuard() -> Element {
    let session = use_session();
    let nav = use_navigator();

    match evaluate(GuardPolicy::Public, &session()) {
        GuardDecision::Allow => rsx! { Outlet::<Route> {} },
        _ => {
            nav.replace(Route::Home {});
            rsx! {}
        }
    }
}

#[component]
pub fn AuthGuard() -> Element {
    rsx! {
        VerifiedOutlet { policy: GuardPolicy::Protected }
    }
}

#[component]
pub fn AdminGuard() -> Element {
    rsx! {
        VerifiedOutlet { policy: GuardPolicy::AdminOnly }
    }
}

/// Runs the mount-time token verification, then admits or redirects.
///
/// A present token is re-verified against the backend before anything
/// renders; a failed verification has already cleared the session, so
/// the policy evaluation below falls through to a redirect.
#[component]
fn VerifiedOutlet(policy: GuardPolicy) -> Element {
    let session = use_session();
    let client = use_api();
    let nav = use_navigator();
    let mut verified = use_signal(|| false);

    let _verification = use_resource(move || {
        let client = client.clone();
        async move {
            ui::session::ensure_verified(&client, session).await;
            verified.set(true);
        }
    });

    if !verified() {
        return rsx! {
            LoadingIndicator { caption: "Checking your session..." }
        };
    }

    match evaluate(policy, &session()) {
        GuardDecision::Allow => rsx! { Outlet::<Route> {} },
        GuardDecision::ToLogin => {
            tracing::debug!("guarded navigation denied, sending to login");
            nav.replace(Route::Login {});
            rsx! {}
        }
        GuardDecision::ToHome => {
            tracing::debug!("guarded navigation not authorized, sending home");
            nav.replace(Route::Home {});
            rsx! {}
        }
    }
}
