//! Create/update session form (admin only).

#[cfg(test)]
#[path = "session_form_test.rs"]
mod session_form_test;

use super::Outcome;
use crate::error::ApiError;
use crate::form::{FormState, SESSION_FORM};
use crate::gateway::ApiClient;
use crate::route::Route;
use crate::types::{SessionPayload, Teacher, iso_date, parse_iso_date};

pub const CREATED_NOTICE: &str = "Session created !";
pub const UPDATED_NOTICE: &str = "Session updated !";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(u64),
}

impl FormMode {
    /// Route this form is mounted on.
    #[must_use]
    pub fn route(self) -> Route {
        match self {
            Self::Create => Route::SessionCreate,
            Self::Update(id) => Route::SessionUpdate(id),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionFormView {
    pub mode: FormMode,
    pub form: FormState,
    /// Options for the teacher select.
    pub teachers: Vec<Teacher>,
    pub on_error: bool,
}

impl SessionFormView {
    /// Open the form. Non-admins are bounced to `/sessions`.
    ///
    /// Loads the teacher options, and in update mode pre-fills the form from
    /// the existing session.
    ///
    /// # Errors
    ///
    /// Returns the route to redirect to when the form cannot be shown.
    pub async fn open(mode: FormMode, api: &ApiClient) -> Result<Self, Route> {
        if !api.store().is_admin() {
            tracing::info!(route = %mode.route(), "session form requires admin");
            return Err(Route::Sessions);
        }
        let mut view = Self { mode, form: FormState::new(SESSION_FORM), teachers: Vec::new(), on_error: false };
        if let Err(e) = view.load(api).await {
            tracing::warn!(error = %e, "session form data unavailable");
            view.on_error = true;
        }
        Ok(view)
    }

    async fn load(&mut self, api: &ApiClient) -> Result<(), ApiError> {
        self.teachers = api.teachers().list().await?;
        if let FormMode::Update(id) = self.mode {
            let session = api.sessions().detail(id).await?;
            self.form.set("name", session.name);
            self.form.set("date", iso_date(session.date));
            self.form.set("teacher_id", session.teacher_id.to_string());
            self.form.set("description", session.description);
        }
        Ok(())
    }

    /// Typed payload, when every field validates and parses.
    #[must_use]
    pub fn payload(&self) -> Option<SessionPayload> {
        if !self.form.is_valid() {
            return None;
        }
        Some(SessionPayload {
            name: self.form.get("name").to_owned(),
            date: parse_iso_date(self.form.get("date"))?,
            teacher_id: self.form.get("teacher_id").trim().parse().ok()?,
            description: self.form.get("description").to_owned(),
        })
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.payload().is_some()
    }

    /// Create or update, then return to the list with a notice.
    pub async fn submit(&mut self, api: &ApiClient) -> Outcome {
        let Some(payload) = self.payload() else {
            return Outcome::none();
        };
        let (result, notice) = match self.mode {
            FormMode::Create => (api.sessions().create(&payload).await, CREATED_NOTICE),
            FormMode::Update(id) => (api.sessions().update(id, &payload).await, UPDATED_NOTICE),
        };
        match result {
            Ok(_) => {
                self.on_error = false;
                Outcome::navigate(Route::Sessions).with_notice(notice)
            }
            Err(e) => {
                tracing::warn!(error = %e, "session save rejected");
                self.on_error = true;
                Outcome::none()
            }
        }
    }
}
