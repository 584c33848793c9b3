//! Session detail screen: participation toggling and admin delete.
//!
//! The participation flag is always derived from a freshly fetched session;
//! a toggle never flips it locally. The teacher request is issued only once
//! the session response is in hand, using the id it carries.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use super::Outcome;
use crate::error::ApiError;
use crate::gateway::ApiClient;
use crate::route::Route;
use crate::store::SessionStore;
use crate::types::{Session, Teacher};

pub const DELETED_NOTICE: &str = "Session deleted !";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailView {
    pub session_id: u64,
    pub user_id: u64,
    pub is_admin: bool,
    pub session: Option<Session>,
    pub teacher: Option<Teacher>,
    pub is_participate: bool,
    pub on_error: bool,
}

impl DetailView {
    /// Bind the view to a session for the logged-in user; `None` when logged out.
    #[must_use]
    pub fn new(session_id: u64, store: &SessionStore) -> Option<Self> {
        let info = store.information()?;
        Some(Self {
            session_id,
            user_id: info.id,
            is_admin: info.admin,
            session: None,
            teacher: None,
            is_participate: false,
            on_error: false,
        })
    }

    /// Fetch the session, then its teacher.
    pub async fn fetch(&mut self, api: &ApiClient) {
        if let Err(e) = self.refresh(api).await {
            tracing::warn!(session_id = self.session_id, error = %e, "session detail unavailable");
            self.on_error = true;
        }
    }

    async fn refresh(&mut self, api: &ApiClient) -> Result<(), ApiError> {
        let session = api.sessions().detail(self.session_id).await?;
        self.is_participate = session.has_participant(self.user_id);
        let teacher_id = session.teacher_id;
        self.session = Some(session);
        self.teacher = Some(api.teachers().detail(teacher_id).await?);
        self.on_error = false;
        Ok(())
    }

    /// Join the session, then re-fetch.
    pub async fn participate(&mut self, api: &ApiClient) {
        let result = api.sessions().participate(self.session_id, self.user_id).await;
        self.after_toggle(api, result).await;
    }

    /// Leave the session, then re-fetch.
    pub async fn un_participate(&mut self, api: &ApiClient) {
        let result = api.sessions().un_participate(self.session_id, self.user_id).await;
        self.after_toggle(api, result).await;
    }

    async fn after_toggle(&mut self, api: &ApiClient, result: Result<(), ApiError>) {
        match result {
            Ok(()) => self.fetch(api).await,
            Err(e) => {
                tracing::warn!(session_id = self.session_id, error = %e, "participation change rejected");
                self.on_error = true;
            }
        }
    }

    /// Delete the session and return to the list. Admins only; anyone else
    /// stays put and no request is issued.
    pub async fn delete(&mut self, api: &ApiClient) -> Outcome {
        if !self.is_admin {
            tracing::info!(session_id = self.session_id, user_id = self.user_id, "session delete requires admin");
            return Outcome::none();
        }
        match api.sessions().delete(self.session_id).await {
            Ok(()) => Outcome::navigate(Route::Sessions).with_notice(DELETED_NOTICE),
            Err(e) => {
                tracing::warn!(session_id = self.session_id, error = %e, "session delete rejected");
                self.on_error = true;
                Outcome::none()
            }
        }
    }

    #[must_use]
    pub fn back(&self) -> Outcome {
        Outcome::back()
    }
}
