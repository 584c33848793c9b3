//! `api/user` gateway backing the account page.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use super::ApiClient;
use crate::error::ApiError;
use crate::transport::Method;
use crate::types::User;

#[derive(Clone, Debug)]
pub struct UserGateway {
    client: ApiClient,
}

impl UserGateway {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET api/user/:id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a user.
    pub async fn detail(&self, id: u64) -> Result<User, ApiError> {
        self.client.get_json(&format!("api/user/{id}")).await
    }

    /// `DELETE api/user/:id`. The server only lets users delete themselves.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.client
            .send_empty(Method::Delete, &format!("api/user/{id}"), None)
            .await
    }
}
