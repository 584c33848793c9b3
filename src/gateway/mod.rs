//! REST gateways, one per API resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every public gateway method maps to exactly one HTTP request issued through
//! [`ApiClient::execute`], which joins the URL, attaches the bearer token from
//! the [`SessionStore`], and logs the round trip. Responses and errors are
//! forwarded unchanged: no retry, caching or merging happens here.

pub mod auth;
pub mod session;
pub mod teacher;
pub mod user;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::store::SessionStore;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method};

pub use auth::AuthGateway;
pub use session::SessionGateway;
pub use teacher::TeacherGateway;
pub use user::UserGateway;

/// Shared plumbing behind every gateway. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    store: SessionStore,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("logged_in", &self.store.is_logged_in())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ClientConfig, transport: Arc<dyn HttpTransport>, store: SessionStore) -> Self {
        Self { config, transport, store }
    }

    /// Client over the native `reqwest` transport.
    #[cfg(feature = "native")]
    #[must_use]
    pub fn native(config: ClientConfig, store: SessionStore) -> Self {
        Self::new(config, Arc::new(crate::transport::ReqwestTransport::new()), store)
    }

    #[must_use]
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub fn auth(&self) -> AuthGateway {
        AuthGateway::new(self.clone())
    }

    #[must_use]
    pub fn sessions(&self) -> SessionGateway {
        SessionGateway::new(self.clone())
    }

    #[must_use]
    pub fn teachers(&self) -> TeacherGateway {
        TeacherGateway::new(self.clone())
    }

    #[must_use]
    pub fn users(&self) -> UserGateway {
        UserGateway::new(self.clone())
    }

    /// Issue one request and fail on a non-2xx status.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or [`ApiError::Status`] for non-2xx.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest {
            method,
            url: self.config.url(path),
            bearer: self.store.bearer_token(),
            body,
        };
        let result = self.transport.send(request).await;
        match &result {
            Ok(resp) if resp.is_success() => {
                tracing::debug!(%method, path, status = resp.status, "api request");
            }
            Ok(resp) => {
                tracing::warn!(%method, path, status = resp.status, "api request rejected");
            }
            Err(e) => {
                tracing::warn!(%method, path, error = %e, "api request failed");
            }
        }
        result?.error_for_status()
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(Method::Get, path, None).await?.json()
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        self.execute(method, path, Some(body)).await?.json()
    }

    /// Issue a request whose response body is ignored.
    pub(crate) async fn send_empty(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<(), ApiError> {
        self.execute(method, path, body).await.map(|_| ())
    }
}

pub(crate) fn encode<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

// =============================================================================
// TEST DOUBLES
// =============================================================================

/// In-memory transport for exercising gateways and views without a server.
#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Replays queued responses and records every request it sees.
    #[derive(Default)]
    pub(crate) struct MockTransport {
        responses: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl MockTransport {
        pub(crate) fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        pub(crate) fn push_json(&self, status: u16, body: serde_json::Value) {
            self.push_raw(status, &body.to_string());
        }

        pub(crate) fn push_raw(&self, status: u16, body: &str) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        }

        pub(crate) fn push_error(&self, message: &str) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Err(ApiError::Transport(message.to_owned())));
        }

        pub(crate) fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }

        /// `(method, url)` pairs in issue order.
        pub(crate) fn calls(&self) -> Vec<(Method, String)> {
            self.requests()
                .into_iter()
                .map(|req| (req.method, req.url))
                .collect()
        }
    }

    #[async_trait::async_trait(?Send)]
    impl HttpTransport for MockTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(HttpResponse { status: 200, body: String::new() }))
        }
    }

    /// An [`ApiClient`] rooted at `http://api.test` over `transport`.
    pub(crate) fn client(transport: &Arc<MockTransport>, store: &SessionStore) -> ApiClient {
        let config = ClientConfig::with_base_url("http://api.test").unwrap();
        ApiClient::new(config, transport.clone(), store.clone())
    }

    pub(crate) fn session_info(id: u64, admin: bool) -> crate::types::SessionInformation {
        crate::types::SessionInformation {
            token: format!("token-{id}"),
            token_type: "Bearer".into(),
            id,
            username: "yoga@studio.com".into(),
            first_name: "Admin".into(),
            last_name: "Admin".into(),
            admin,
        }
    }

    pub(crate) fn session_json(id: u64, teacher_id: u64, users: &[u64]) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": "Test Session",
            "description": "Description of test session",
            "date": "2025-01-01T00:00:00.000+00:00",
            "teacher_id": teacher_id,
            "users": users,
            "createdAt": "2024-12-01T10:00:00",
            "updatedAt": "2024-12-02T10:00:00",
        })
    }

    pub(crate) fn teacher_json(id: u64) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "firstName": "Yoga",
            "lastName": "Teacher",
            "createdAt": "2024-01-01T00:00:00",
            "updatedAt": "2024-01-01T00:00:00",
        })
    }
}
