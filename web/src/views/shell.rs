//! Application chrome: navbar, footer, and the routed page body.

use dioxus::prelude::*;

use ui::{use_api, use_session, Navbar};

use crate::Route;

#[component]
pub fn AppShell() -> Element {
    let session = use_session();
    let client = use_api();
    let nav = use_navigator();
    let mut menu_open = use_signal(|| false);

    let on_logout = move |_| {
        ui::session::sign_out(&client, session);
        menu_open.set(false);
        nav.push(Route::Home {});
    };

    rsx! {
        Navbar {
            brand: rsx! {
                Link { class: "brand", to: Route::Home {}, "EventTickets" }
            },
            links: rsx! {
                Link { class: "nav-link", to: Route::Home {}, "Events" }
                if session().is_authenticated() {
                    Link { class: "nav-link", to: Route::Cart {}, "Cart" }
                    Link { class: "nav-link", to: Route::Orders {}, "My Orders" }
                }
                if session().is_admin() {
                    Link { class: "nav-link", to: Route::AdminDashboard {}, "Admin" }
                }
            },
            actions: rsx! {
                if let Some(user) = session().user {
                    div { class: "user-menu",
                        button {
                            class: "user-menu-toggle",
                            onclick: move |_| menu_open.set(!menu_open()),
                            "{user.name}"
                        }
                        if menu_open() {
                            div { class: "user-menu-panel",
                                div { class: "user-menu-identity",
                                    span { class: "user-menu-name", "{user.name}" }
                                    span { class: "user-menu-email", "{user.email}" }
                                }
                                button { class: "user-menu-item", onclick: on_logout, "Sign out" }
                            }
                        }
                    }
                } else {
                    Link { class: "btn btn-outline", to: Route::Login {}, "Sign in" }
                    Link { class: "btn btn-primary", to: Route::Register {}, "Sign up" }
                }
            },
        }

        main { class: "page-body",
            Outlet::<Route> {}
        }

        footer { class: "footer",
            div { class: "footer-inner",
                span { class: "footer-brand", "EventTickets" }
                p { "Find your next event, from arena tours to club nights." }
                p { class: "footer-fine", "Tickets are delivered by email after purchase." }
            }
        }
    }
}
