//! View controllers: one per screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! A view owns its form/display state and exposes one async method per user
//! action. Each action issues one gateway call; success yields an
//! [`Outcome`] (where to go, what to announce), failure raises the view's
//! `on_error` flag. Front-ends render the state and perform the outcome.

pub mod account;
pub mod detail;
pub mod list;
pub mod login;
pub mod register;
pub mod session_form;


use std::time::Duration;

use crate::route::Route;
use crate::store::SessionStore;

pub use account::AccountView;
pub use detail::DetailView;
pub use list::ListView;
pub use login::LoginView;
pub use register::RegisterView;
pub use session_form::{FormMode, SessionFormView};

/// How long a confirmation notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_millis(3000);
/// Label of the notice's dismiss action.
pub const NOTICE_ACTION: &str = "Close";

/// Where the front-end should go next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    To(Route),
    /// Browser-history back (or the previous screen in a terminal).
    Back,
}

/// A short confirmation shown after a successful mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub action: &'static str,
    pub duration: Duration,
}

impl Notice {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), action: NOTICE_ACTION, duration: NOTICE_DURATION }
    }
}

/// What a user action asks the front-end to do.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub navigation: Option<Navigation>,
    pub notice: Option<Notice>,
}

impl Outcome {
    /// Stay put.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn navigate(route: Route) -> Self {
        Self { navigation: Some(Navigation::To(route)), notice: None }
    }

    #[must_use]
    pub fn back() -> Self {
        Self { navigation: Some(Navigation::Back), notice: None }
    }

    #[must_use]
    pub fn with_notice(mut self, message: impl Into<String>) -> Self {
        self.notice = Some(Notice::new(message));
        self
    }

    /// Target route, if the outcome navigates to one.
    #[must_use]
    pub fn route(&self) -> Option<Route> {
        match self.navigation {
            Some(Navigation::To(route)) => Some(route),
            _ => None,
        }
    }
}

/// Clear the session and return to the login screen.
#[must_use]
pub fn logout(store: &SessionStore) -> Outcome {
    store.log_out();
    Outcome::navigate(Route::Login)
}
