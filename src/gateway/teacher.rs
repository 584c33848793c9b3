//! `api/teacher` gateway. Teachers are read-only from the client.

#[cfg(test)]
#[path = "teacher_test.rs"]
mod teacher_test;

use super::ApiClient;
use crate::error::ApiError;
use crate::types::Teacher;

#[derive(Clone, Debug)]
pub struct TeacherGateway {
    client: ApiClient,
}

impl TeacherGateway {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET api/teacher`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a teacher list.
    pub async fn list(&self) -> Result<Vec<Teacher>, ApiError> {
        self.client.get_json("api/teacher").await
    }

    /// `GET api/teacher/:id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a teacher.
    pub async fn detail(&self, id: u64) -> Result<Teacher, ApiError> {
        self.client.get_json(&format!("api/teacher/{id}")).await
    }
}
