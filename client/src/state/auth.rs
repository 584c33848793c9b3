#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use yoga::SessionStore;
use yoga::types::SessionInformation;

/// Render-side mirror of the [`SessionStore`].
///
/// Refreshed from the store every time its logged-in flag changes, so
/// navigation chrome can react without holding the store itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub logged_in: bool,
    pub user: Option<SessionInformation>,
}

impl AuthState {
    pub fn from_store(store: &SessionStore) -> Self {
        Self { logged_in: store.is_logged_in(), user: store.information() }
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.admin)
    }
}
