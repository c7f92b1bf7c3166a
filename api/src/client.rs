//! The HTTP gateway.
//!
//! Cross-cutting request concerns live here and nowhere else: the base
//! address, JSON bodies, bearer injection from the session, and the 401
//! tap. The client itself never navigates — a single observer installed
//! at bootstrap reacts to [`ApiError::Unauthorized`], and the error still
//! reaches the original caller, who must not assume the observer alone
//! resolved the call.

use std::cell::RefCell;
use std::rc::Rc;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::{failure_from_status, ApiError};
use crate::session::Session;

type UnauthorizedObserver = Box<dyn Fn()>;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: Session,
    observer: Rc<RefCell<Option<UnauthorizedObserver>>>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
            observer: Rc::new(RefCell::new(None)),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Install the application-wide 401 observer. There is exactly one;
    /// installing again replaces the previous observer.
    pub fn set_unauthorized_observer(&self, observer: impl Fn() + 'static) {
        *self.observer.borrow_mut() = Some(Box::new(observer));
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(Method::GET, path)).await
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::GET, path).query(query)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::POST, path).json(body)).await
    }

    /// POST with an empty JSON body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(Method::POST, path).json(&serde_json::json!({})))
            .await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::PUT, path).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(Method::DELETE, path)).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.config.url(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(|err| {
            tracing::warn!(%err, "request never reached the backend");
            ApiError::Network(err.to_string())
        })?;
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|err| ApiError::Decode(err.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(self.fail(status, &body))
        }
    }

    /// Map a non-success response, tapping the 401 observer on the way out.
    fn fail(&self, status: StatusCode, body: &str) -> ApiError {
        let error = failure_from_status(status.as_u16(), body);
        if error.is_unauthorized() {
            tracing::warn!("unauthorized response, notifying the session observer");
            if let Some(observer) = &*self.observer.borrow() {
                observer();
            }
        }
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, User};
    use crate::storage::MemoryStore;

    fn client_with_session() -> ApiClient {
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
        ApiClient::new(ApiConfig::new("http://localhost:5000"), session)
    }

    #[test]
    fn unauthorized_notifies_the_observer_and_still_errors() {
        let client = client_with_session();
        // bootstrap wiring: the observer owns the session-clear side effect
        let session = client.session().clone();
        client.set_unauthorized_observer(move || session.clear());

        let error = client.fail(StatusCode::UNAUTHORIZED, "");
        assert!(error.is_unauthorized());
        assert!(!client.session().is_authenticated());
    }

    #[test]
    fn other_failures_leave_the_session_alone() {
        let client = client_with_session();
        let session = client.session().clone();
        client.set_unauthorized_observer(move || session.clear());

        let error = client.fail(StatusCode::BAD_REQUEST, r#"{"error":"nope"}"#);
        assert_eq!(error.to_string(), "nope");
        assert!(client.session().is_authenticated());
    }

    #[test]
    fn unauthorized_without_an_observer_is_still_returned() {
        let client = client_with_session();
        assert!(client.fail(StatusCode::UNAUTHORIZED, "").is_unauthorized());
    }
}
