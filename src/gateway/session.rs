//! `api/session` gateway: CRUD plus participation.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::ApiClient;
use crate::error::ApiError;
use crate::transport::Method;
use crate::types::{Session, SessionPayload};

const PATH: &str = "api/session";

#[derive(Clone, Debug)]
pub struct SessionGateway {
    client: ApiClient,
}

impl SessionGateway {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET api/session`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a session list.
    pub async fn list(&self) -> Result<Vec<Session>, ApiError> {
        self.client.get_json(PATH).await
    }

    /// `GET api/session/:id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a session.
    pub async fn detail(&self, id: u64) -> Result<Session, ApiError> {
        self.client.get_json(&format!("{PATH}/{id}")).await
    }

    /// `POST api/session`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a session.
    pub async fn create(&self, session: &SessionPayload) -> Result<Session, ApiError> {
        self.client.send_json(Method::Post, PATH, session).await
    }

    /// `PUT api/session/:id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a session.
    pub async fn update(&self, id: u64, session: &SessionPayload) -> Result<Session, ApiError> {
        self.client
            .send_json(Method::Put, &format!("{PATH}/{id}"), session)
            .await
    }

    /// `DELETE api/session/:id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.client
            .send_empty(Method::Delete, &format!("{PATH}/{id}"), None)
            .await
    }

    /// `POST api/session/:id/participate/:userId`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn participate(&self, session_id: u64, user_id: u64) -> Result<(), ApiError> {
        self.client
            .send_empty(Method::Post, &participation_path(session_id, user_id), None)
            .await
    }

    /// `DELETE api/session/:id/participate/:userId`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn un_participate(&self, session_id: u64, user_id: u64) -> Result<(), ApiError> {
        self.client
            .send_empty(Method::Delete, &participation_path(session_id, user_id), None)
            .await
    }
}

fn participation_path(session_id: u64, user_id: u64) -> String {
    format!("{PATH}/{session_id}/participate/{user_id}")
}
