//! Account page: profile display and self-deletion.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use super::Outcome;
use crate::gateway::ApiClient;
use crate::route::Route;
use crate::types::User;

pub const ACCOUNT_DELETED_NOTICE: &str = "Your account has been deleted !";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountView {
    pub user: Option<User>,
    pub on_error: bool,
}

impl AccountView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the logged-in user's profile.
    pub async fn load(&mut self, api: &ApiClient) {
        let Some(id) = api.store().user_id() else {
            self.on_error = true;
            return;
        };
        match api.users().detail(id).await {
            Ok(user) => {
                self.user = Some(user);
                self.on_error = false;
            }
            Err(e) => {
                tracing::warn!(user_id = id, error = %e, "account unavailable");
                self.on_error = true;
            }
        }
    }

    /// Delete the account, log out, and return to `/login`.
    pub async fn delete(&mut self, api: &ApiClient) -> Outcome {
        let Some(id) = api.store().user_id() else {
            return Outcome::navigate(Route::Login);
        };
        match api.users().delete(id).await {
            Ok(()) => {
                self.user = None;
                super::logout(api.store()).with_notice(ACCOUNT_DELETED_NOTICE)
            }
            Err(e) => {
                tracing::warn!(user_id = id, error = %e, "account delete rejected");
                self.on_error = true;
                Outcome::none()
            }
        }
    }
}
