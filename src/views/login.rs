//! Login screen controller.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::Outcome;
use crate::form::{FormState, LOGIN_FORM};
use crate::gateway::ApiClient;
use crate::route::Route;
use crate::types::LoginRequest;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginView {
    pub form: FormState,
    /// Password field masking; starts hidden.
    pub hide_password: bool,
    /// Set when the last submission was rejected.
    pub on_error: bool,
}

impl Default for LoginView {
    fn default() -> Self {
        Self { form: FormState::new(LOGIN_FORM), hide_password: true, on_error: false }
    }
}

impl LoginView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the submit control is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.form.is_valid()
    }

    pub fn toggle_password_visibility(&mut self) {
        self.hide_password = !self.hide_password;
    }

    /// Log in with the form's credentials.
    ///
    /// On success the session information is stored and the outcome points at
    /// `/sessions`. On failure nothing is stored and the view stays put.
    pub async fn submit(&mut self, api: &ApiClient) -> Outcome {
        if !self.can_submit() {
            return Outcome::none();
        }
        let credentials = LoginRequest {
            email: self.form.get("email").to_owned(),
            password: self.form.get("password").to_owned(),
        };
        match api.auth().login(&credentials).await {
            Ok(info) => {
                api.store().log_in(info);
                self.on_error = false;
                Outcome::navigate(Route::Sessions)
            }
            Err(e) => {
                tracing::warn!(error = %e, "login rejected");
                self.on_error = true;
                Outcome::none()
            }
        }
    }
}
