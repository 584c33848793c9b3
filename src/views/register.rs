//! Registration screen controller.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use super::Outcome;
use crate::form::{FormState, REGISTER_FORM};
use crate::gateway::ApiClient;
use crate::route::Route;
use crate::types::RegisterRequest;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterView {
    pub form: FormState,
    pub on_error: bool,
}

impl Default for RegisterView {
    fn default() -> Self {
        Self { form: FormState::new(REGISTER_FORM), on_error: false }
    }
}

impl RegisterView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.form.is_valid()
    }

    /// Register the profile; success sends the user to `/login`.
    pub async fn submit(&mut self, api: &ApiClient) -> Outcome {
        if !self.can_submit() {
            return Outcome::none();
        }
        let profile = RegisterRequest {
            email: self.form.get("email").to_owned(),
            first_name: self.form.get("firstName").to_owned(),
            last_name: self.form.get("lastName").to_owned(),
            password: self.form.get("password").to_owned(),
        };
        match api.auth().register(&profile).await {
            Ok(()) => {
                self.on_error = false;
                Outcome::navigate(Route::Login)
            }
            Err(e) => {
                tracing::warn!(error = %e, "registration rejected");
                self.on_error = true;
                Outcome::none()
            }
        }
    }
}
