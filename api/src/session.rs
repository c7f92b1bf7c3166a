//! The session: current token, current user, and nothing else.
//!
//! The in-memory copy is authoritative for the lifetime of the page; the
//! backing [`TokenStore`] is written through on every change so a reload
//! restores the session. Token and user are written together and cleared
//! together — a session holding one without the other is treated as
//! logged out everywhere.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Role, User};
use crate::storage::TokenStore;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the user profile, stored as JSON.
pub const USER_KEY: &str = "user";

/// Plain snapshot of the session, cheap to clone into view state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionState {
    /// True iff both the token and the user are present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated()
            && self.user.as_ref().is_some_and(|user| user.role == Role::Admin)
    }
}

/// Single owner of the session. Clones share the same state, so every
/// part of the application observes the same login.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn TokenStore>,
    state: Rc<RefCell<SessionState>>,
}

impl Session {
    /// Restore a session from the backing store.
    ///
    /// A half-persisted session — token without user, user without token,
    /// or an unreadable profile — is discarded and the store scrubbed.
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        let token = store.get(TOKEN_KEY);
        let user = store
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str::<User>(&raw).ok());
        let state = match (token, user) {
            (Some(token), Some(user)) => SessionState {
                token: Some(token),
                user: Some(user),
            },
            _ => {
                store.remove(TOKEN_KEY);
                store.remove(USER_KEY);
                SessionState::default()
            }
        };
        Self {
            store,
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.state.borrow().is_admin()
    }

    /// Replace the session after a successful login.
    pub fn establish(&self, token: String, user: User) {
        self.store.set(TOKEN_KEY, &token);
        if let Ok(raw) = serde_json::to_string(&user) {
            self.store.set(USER_KEY, &raw);
        }
        *self.state.borrow_mut() = SessionState {
            token: Some(token),
            user: Some(user),
        };
    }

    /// Refresh the stored profile after a successful verification.
    pub fn update_user(&self, user: User) {
        if let Ok(raw) = serde_json::to_string(&user) {
            self.store.set(USER_KEY, &raw);
        }
        self.state.borrow_mut().user = Some(user);
    }

    /// Drop the session and its persisted copy. Idempotent; cannot fail.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
        *self.state.borrow_mut() = SessionState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn user(role: Role) -> User {
        User {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn fresh_store_is_logged_out() {
        let session = Session::new(Rc::new(MemoryStore::new()));
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn establish_sets_both_and_persists() {
        let store = MemoryStore::new();
        let session = Session::new(Rc::new(store.clone()));
        session.establish("tok-1".to_string(), user(Role::User));

        assert!(session.is_authenticated());
        assert_eq!(store.get(TOKEN_KEY), Some("tok-1".to_string()));
        assert!(store.get(USER_KEY).is_some());

        // a reload from the same store restores the session
        let restored = Session::new(Rc::new(store));
        assert!(restored.is_authenticated());
        assert_eq!(restored.user().unwrap().name, "Ada");
    }

    #[test]
    fn clear_removes_both_and_is_idempotent() {
        let store = MemoryStore::new();
        let session = Session::new(Rc::new(store.clone()));
        session.establish("tok-1".to_string(), user(Role::User));

        session.clear();
        session.clear();
        assert!(!session.is_authenticated());
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(USER_KEY), None);
    }

    #[test]
    fn token_without_user_is_discarded_on_restore() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "orphan");

        let session = Session::new(Rc::new(store.clone()));
        assert!(!session.is_authenticated());
        // the orphaned half is scrubbed from storage too
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[test]
    fn user_without_token_is_discarded_on_restore() {
        let store = MemoryStore::new();
        store.set(USER_KEY, r#"{"id":1,"name":"Ada","email":"a@b.c","role":"user"}"#);

        let session = Session::new(Rc::new(store));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn corrupt_profile_is_treated_as_logged_out() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok");
        store.set(USER_KEY, "not json");

        let session = Session::new(Rc::new(store));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn admin_requires_authentication_and_role() {
        let session = Session::new(Rc::new(MemoryStore::new()));
        assert!(!session.is_admin());

        session.establish("tok".to_string(), user(Role::User));
        assert!(!session.is_admin());

        session.establish("tok".to_string(), user(Role::Admin));
        assert!(session.is_admin());
    }
}
