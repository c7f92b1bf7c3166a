use dioxus::prelude::*;

/// Top navigation shell. The routing crate supplies the actual links so
/// this stays free of route types.
#[component]
pub fn Navbar(brand: Element, links: Element, actions: Element) -> Element {
    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                div { class: "navbar-brand", {brand} }
                div { class: "navbar-links", {links} }
                div { class: "navbar-actions", {actions} }
            }
        }
    }
}
