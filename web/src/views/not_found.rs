use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "result-page",
            div { class: "card result-card",
                h1 { class: "not-found-code", "404" }
                p { "There is nothing at \"/{path}\"." }
                Link { class: "btn btn-primary", to: Route::Home {}, "Back to events" }
            }
        }
    }
}
