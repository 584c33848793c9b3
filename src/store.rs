//! In-memory holder for the logged-in user's session information.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guards, the gateways (for the bearer token) and every
//! user-aware view read from here. Front-ends subscribe to the logged-in
//! flag to re-render navigation chrome.
//!
//! Nothing is persisted: a reload or a new process starts logged out.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use tokio::sync::watch;

use crate::types::SessionInformation;

/// Shared, cheaply clonable session holder.
#[derive(Clone, Debug)]
pub struct SessionStore {
    info: Arc<watch::Sender<Option<SessionInformation>>>,
    logged_in: Arc<watch::Sender<bool>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        let (info, _) = watch::channel(None);
        let (logged_in, _) = watch::channel(false);
        Self { info: Arc::new(info), logged_in: Arc::new(logged_in) }
    }

    /// Store `info` and raise the logged-in flag.
    pub fn log_in(&self, info: SessionInformation) {
        tracing::debug!(user_id = info.id, admin = info.admin, "session stored");
        self.info.send_replace(Some(info));
        self.logged_in.send_replace(true);
    }

    /// Drop the session information and lower the logged-in flag.
    pub fn log_out(&self) {
        tracing::debug!("session cleared");
        self.info.send_replace(None);
        self.logged_in.send_replace(false);
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        *self.logged_in.borrow()
    }

    /// Snapshot of the current session information.
    #[must_use]
    pub fn information(&self) -> Option<SessionInformation> {
        self.info.borrow().clone()
    }

    #[must_use]
    pub fn user_id(&self) -> Option<u64> {
        self.info.borrow().as_ref().map(|info| info.id)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.info.borrow().as_ref().is_some_and(|info| info.admin)
    }

    #[must_use]
    pub fn bearer_token(&self) -> Option<String> {
        self.info.borrow().as_ref().map(|info| info.token.clone())
    }

    /// Observe the logged-in flag. The receiver starts at the current value.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.logged_in.subscribe()
    }
}
