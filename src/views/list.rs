//! Session list screen.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use crate::gateway::ApiClient;
use crate::types::{Session, SessionInformation};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListView {
    pub sessions: Vec<Session>,
    /// Snapshot of the logged-in user, taken at load time.
    pub user: Option<SessionInformation>,
    pub on_error: bool,
}

impl ListView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch every session.
    pub async fn load(&mut self, api: &ApiClient) {
        self.user = api.store().information();
        match api.sessions().list().await {
            Ok(sessions) => {
                self.sessions = sessions;
                self.on_error = false;
            }
            Err(e) => {
                tracing::warn!(error = %e, "session list unavailable");
                self.on_error = true;
            }
        }
    }

    /// Admins get create/edit controls.
    #[must_use]
    pub fn can_manage(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.admin)
    }
}
