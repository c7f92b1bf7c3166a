//! Small shared presentation pieces.

use api::models::Pagination;
use dioxus::prelude::*;

/// Centered spinner with an optional caption.
#[component]
pub fn LoadingIndicator(#[props(default = String::new())] caption: String) -> Element {
    rsx! {
        div { class: "loading",
            div { class: "spinner" }
            if !caption.is_empty() {
                p { class: "loading-caption", "{caption}" }
            }
        }
    }
}

/// Error banner. When `on_retry` is given it renders the manual retry
/// affordance that re-issues the failed load; there is never an
/// automatic retry.
#[component]
pub fn ErrorBanner(message: String, on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div { class: "banner banner-error",
            p { "{message}" }
            if let Some(retry) = on_retry {
                button {
                    class: "btn btn-outline btn-small",
                    onclick: move |_| retry.call(()),
                    "Try again"
                }
            }
        }
    }
}

/// Success/info banner.
#[component]
pub fn NoticeBanner(message: String) -> Element {
    rsx! {
        div { class: "banner banner-notice",
            p { "{message}" }
        }
    }
}

/// Empty-state placeholder with an optional call to action.
#[component]
pub fn EmptyState(
    title: String,
    #[props(default = String::new())] detail: String,
    action: Option<Element>,
) -> Element {
    rsx! {
        div { class: "empty-state",
            h2 { "{title}" }
            if !detail.is_empty() {
                p { "{detail}" }
            }
            if let Some(action) = action {
                {action}
            }
        }
    }
}

/// Window of page numbers to offer, at most five wide, centered on the
/// current page where possible.
pub fn page_window(page: u32, pages: u32) -> std::ops::RangeInclusive<u32> {
    const WIDTH: u32 = 5;
    if pages == 0 {
        return 1..=0; // empty
    }
    let start = page.saturating_sub(WIDTH / 2).max(1);
    let end = (start + WIDTH - 1).min(pages);
    let start = end.saturating_sub(WIDTH - 1).max(1);
    start..=end
}

/// Previous / numbered / next pagination controls. Renders nothing for a
/// single page.
#[component]
pub fn Pager(pagination: Pagination, on_page: EventHandler<u32>) -> Element {
    if pagination.pages <= 1 {
        return rsx! {};
    }
    let page = pagination.page;
    let pages = pagination.pages;
    rsx! {
        nav { class: "pager",
            button {
                class: "pager-btn",
                disabled: page <= 1,
                onclick: move |_| on_page.call(page - 1),
                "Previous"
            }
            for number in page_window(page, pages) {
                button {
                    class: if number == page { "pager-btn pager-current" } else { "pager-btn" },
                    onclick: move |_| on_page.call(number),
                    "{number}"
                }
            }
            button {
                class: "pager-btn",
                disabled: page >= pages,
                onclick: move |_| on_page.call(page + 1),
                "Next"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_centers_on_the_current_page() {
        assert_eq!(page_window(5, 10), 3..=7);
    }

    #[test]
    fn window_clamps_at_both_ends() {
        assert_eq!(page_window(1, 10), 1..=5);
        assert_eq!(page_window(10, 10), 6..=10);
        assert_eq!(page_window(1, 3), 1..=3);
        assert_eq!(page_window(2, 2), 1..=2);
    }
}
