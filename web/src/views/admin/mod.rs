//! Back-office views. Everything under here sits behind the admin guard
//! and talks to the `/admin` endpoints only.

use dioxus::prelude::*;

use crate::Route;

mod dashboard;
pub use dashboard::AdminDashboard;

mod events;
pub use events::{EditEvent, ManageEvents, NewEvent};

mod event_types;
pub use event_types::ManageEventTypes;

mod venues;
pub use venues::ManageVenues;

mod artists;
pub use artists::ManageArtists;

/// Sidebar plus routed content for the admin area.
#[component]
pub fn AdminShell() -> Element {
    let route = use_route::<Route>();

    let events_active = matches!(
        route,
        Route::ManageEvents {} | Route::NewEvent {} | Route::EditEvent { .. }
    );

    rsx! {
        div { class: "admin-layout",
            aside { class: "admin-sidebar",
                h2 { "Admin panel" }
                nav { class: "admin-nav",
                    Link {
                        class: admin_link_class(matches!(route, Route::AdminDashboard {})),
                        to: Route::AdminDashboard {},
                        "Dashboard"
                    }
                    Link {
                        class: admin_link_class(events_active),
                        to: Route::ManageEvents {},
                        "Events"
                    }
                    Link {
                        class: admin_link_class(matches!(route, Route::ManageEventTypes {})),
                        to: Route::ManageEventTypes {},
                        "Event types"
                    }
                    Link {
                        class: admin_link_class(matches!(route, Route::ManageVenues {})),
                        to: Route::ManageVenues {},
                        "Venues"
                    }
                    Link {
                        class: admin_link_class(matches!(route, Route::ManageArtists {})),
                        to: Route::ManageArtists {},
                        "Artists"
                    }
                }
                Link { class: "admin-back", to: Route::Home {}, "← Back to site" }
            }
            div { class: "admin-content",
                Outlet::<Route> {}
            }
        }
    }
}

fn admin_link_class(active: bool) -> &'static str {
    if active {
        "admin-link admin-link-active"
    } else {
        "admin-link"
    }
}
