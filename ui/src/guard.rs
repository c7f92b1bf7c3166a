//! Route admission policy.
//!
//! The decision is a pure function of the policy and the session
//! snapshot; the routing crate owns the redirects themselves. Per
//! guarded navigation the outcome is terminal — there is no retry, the
//! user re-authenticates or goes elsewhere.

use api::SessionState;

/// Who may see a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardPolicy {
    /// Anyone, but authenticated visitors are bounced home. Used for the
    /// login and register views.
    Public,
    /// Authenticated users only.
    Protected,
    /// Authenticated admins only.
    AdminOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    ToLogin,
    /// Authenticated but not authorized — a valid user, just not here.
    ToHome,
}

pub fn evaluate(policy: GuardPolicy, state: &SessionState) -> GuardDecision {
    match policy {
        GuardPolicy::Public => {
            if state.is_authenticated() {
                GuardDecision::ToHome
            } else {
                GuardDecision::Allow
            }
        }
        GuardPolicy::Protected => {
            if state.is_authenticated() {
                GuardDecision::Allow
            } else {
                GuardDecision::ToLogin
            }
        }
        GuardPolicy::AdminOnly => {
            if !state.is_authenticated() {
                GuardDecision::ToLogin
            } else if state.is_admin() {
                GuardDecision::Allow
            } else {
                GuardDecision::ToHome
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use api::models::{Role, User};

    use super::*;

    fn anonymous() -> SessionState {
        SessionState::default()
    }

    fn signed_in(role: Role) -> SessionState {
        SessionState {
            token: Some("tok".to_string()),
            user: Some(User {
                id: 1,
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                role,
            }),
        }
    }

    #[test]
    fn public_views_bounce_authenticated_visitors_home() {
        assert_eq!(evaluate(GuardPolicy::Public, &anonymous()), GuardDecision::Allow);
        assert_eq!(
            evaluate(GuardPolicy::Public, &signed_in(Role::User)),
            GuardDecision::ToHome
        );
    }

    #[test]
    fn protected_views_require_a_full_session() {
        assert_eq!(
            evaluate(GuardPolicy::Protected, &signed_in(Role::User)),
            GuardDecision::Allow
        );
        assert_eq!(
            evaluate(GuardPolicy::Protected, &anonymous()),
            GuardDecision::ToLogin
        );
    }

    #[test]
    fn half_set_sessions_count_as_logged_out() {
        let token_only = SessionState {
            token: Some("tok".to_string()),
            user: None,
        };
        assert_eq!(
            evaluate(GuardPolicy::Protected, &token_only),
            GuardDecision::ToLogin
        );

        let user_only = SessionState {
            token: None,
            user: signed_in(Role::Admin).user,
        };
        assert_eq!(
            evaluate(GuardPolicy::AdminOnly, &user_only),
            GuardDecision::ToLogin
        );
    }

    #[test]
    fn admin_views_send_plain_users_home_not_to_login() {
        assert_eq!(
            evaluate(GuardPolicy::AdminOnly, &signed_in(Role::User)),
            GuardDecision::ToHome
        );
        assert_eq!(
            evaluate(GuardPolicy::AdminOnly, &signed_in(Role::Admin)),
            GuardDecision::Allow
        );
        assert_eq!(
            evaluate(GuardPolicy::AdminOnly, &anonymous()),
            GuardDecision::ToLogin
        );
    }
}
