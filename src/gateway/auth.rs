//! `api/auth` gateway: login and registration.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::{ApiClient, encode};
use crate::error::ApiError;
use crate::transport::Method;
use crate::types::{LoginRequest, RegisterRequest, SessionInformation};

#[derive(Clone, Debug)]
pub struct AuthGateway {
    client: ApiClient,
}

impl AuthGateway {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST api/auth/login`.
    ///
    /// The caller decides what to do with the returned information; the
    /// session store is not touched here.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or rejected credentials.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<SessionInformation, ApiError> {
        self.client
            .send_json(Method::Post, "api/auth/login", credentials)
            .await
    }

    /// `POST api/auth/register`. The server answers with no content.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a rejected profile.
    pub async fn register(&self, profile: &RegisterRequest) -> Result<(), ApiError> {
        let body = encode(profile)?;
        self.client
            .send_empty(Method::Post, "api/auth/register", Some(body))
            .await
    }
}
