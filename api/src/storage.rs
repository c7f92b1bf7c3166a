//! Durable key/value storage for the session.
//!
//! The browser build persists through `localStorage`; everything else
//! (tests, native tooling) uses the in-memory store. Both sit behind
//! [`TokenStore`] so the session logic never touches a platform API.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Keyed string storage that outlives a page load.
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory [`TokenStore`] for tests and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// `localStorage`-backed [`TokenStore`].
///
/// Storage access can fail (private browsing, disabled storage); every
/// operation degrades to a no-op or `None` rather than failing the caller.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Create the platform-appropriate store.
pub fn make_token_store() -> Rc<dyn TokenStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("token"), None);

        store.set("token", "abc");
        assert_eq!(store.get("token"), Some("abc".to_string()));

        store.remove("token");
        assert_eq!(store.get("token"), None);
    }
}
