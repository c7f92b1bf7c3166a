//! Thin wrappers over the browser environment, harmless off-wasm.

/// Full-page redirect. Used for the global 401 bounce and the hand-off
/// to the payment provider, where a router push is not enough.
pub fn hard_redirect(href: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(href, "hard redirect skipped off-wasm");
    }
}

/// The current location's raw query string, leading `?` included.
pub fn current_query() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// Blocking confirm dialog; permissive off-wasm so flows stay drivable.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|window| window.confirm_with_message(message).unwrap_or(false))
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        true
    }
}

/// Jump back to the top of the page after a pagination change.
pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
