//! Authentication operations against the session and the auth endpoints.

use serde_json::json;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{LoginResponse, MessageAck, NewUser, User, VerifyResponse};

/// `POST /auth/login`. On success the session is established and
/// persisted; on failure the existing session is left untouched and the
/// error's `Display` is the message to show.
pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<User, ApiError> {
    let response: LoginResponse = api
        .post("/auth/login", &json!({ "email": email, "password": password }))
        .await?;
    api.session().establish(response.token, response.user.clone());
    tracing::info!(user = %response.user.email, "signed in");
    Ok(response.user)
}

/// `POST /auth/register`. Does not authenticate — the caller routes the
/// new user to the login form.
pub async fn register(api: &ApiClient, profile: &NewUser) -> Result<String, ApiError> {
    let ack: MessageAck = api.post("/auth/register", profile).await?;
    Ok(ack.message)
}

/// `GET /auth/verify`.
///
/// Without a token this fails locally and no network call is made. Any
/// failure — rejected token, malformed response, network down — clears
/// the session: an unverifiable token is treated as invalid.
pub async fn verify_token(api: &ApiClient) -> Result<User, ApiError> {
    if api.session().token().is_none() {
        return Err(ApiError::Unauthorized);
    }
    match api.get::<VerifyResponse>("/auth/verify").await {
        Ok(response) => {
            api.session().update_user(response.user.clone());
            Ok(response.user)
        }
        Err(err) => {
            tracing::warn!(%err, "token verification failed, dropping session");
            api.session().clear();
            Err(err)
        }
    }
}

/// Clear the session and its persisted copy. Idempotent; cannot fail.
pub fn logout(api: &ApiClient) {
    api.session().clear();
    tracing::info!("signed out");
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::config::ApiConfig;
    use crate::session::Session;
    use crate::storage::MemoryStore;

    #[tokio::test]
    async fn verify_without_a_token_fails_locally() {
        // no backend is running; a network attempt would error differently
        let session = Session::new(Rc::new(MemoryStore::new()));
        let api = ApiClient::new(ApiConfig::new("http://localhost:1"), session);

        let result = verify_token(&api).await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
        assert!(!api.session().is_authenticated());
    }

    #[tokio::test]
    async fn verify_failure_of_any_kind_clears_the_session() {
        use crate::models::{Role, User};

        let session = Session::new(Rc::new(MemoryStore::new()));
        session.establish(
            "tok".to_string(),
            User {
                id: 1,
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                role: Role::User,
            },
        );
        // nothing listens on port 1, so this is the network-down case
        let api = ApiClient::new(ApiConfig::new("http://127.0.0.1:1"), session);

        let result = verify_token(&api).await;
        assert!(result.is_err());
        assert!(!api.session().is_authenticated());
    }

    #[test]
    fn logout_is_idempotent() {
        let session = Session::new(Rc::new(MemoryStore::new()));
        let api = ApiClient::new(ApiConfig::new("http://localhost:1"), session);
        logout(&api);
        logout(&api);
        assert!(!api.session().is_authenticated());
    }
}
