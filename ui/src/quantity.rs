use dioxus::prelude::*;

/// Stepper bounded to `[0, available]`. The buttons disable at the
/// bounds; the owning view performs the actual clamped mutation.
#[component]
pub fn QuantityPicker(
    quantity: u32,
    available: u32,
    on_increment: EventHandler<()>,
    on_decrement: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "quantity-picker",
            button {
                class: "quantity-btn",
                disabled: quantity == 0,
                onclick: move |_| on_decrement.call(()),
                "−"
            }
            span { class: "quantity-value", "{quantity}" }
            button {
                class: "quantity-btn",
                disabled: quantity >= available,
                onclick: move |_| on_increment.call(()),
                "+"
            }
        }
    }
}
