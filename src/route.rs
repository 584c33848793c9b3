//! Client route table and navigation guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Front-ends map URLs/commands onto [`Route`]s and ask [`resolve`] where the
//! user actually lands once the guards have run.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::store::SessionStore;

/// Every screen the client can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Sessions,
    SessionCreate,
    SessionUpdate(u64),
    SessionDetail(u64),
    Account,
    NotFound,
}

impl Route {
    /// Parse a client path. Unknown paths map to [`Route::NotFound`].
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] | ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["sessions"] => Self::Sessions,
            ["sessions", "create"] => Self::SessionCreate,
            ["sessions", "update", id] => id.parse().map_or(Self::NotFound, Self::SessionUpdate),
            ["sessions", "detail", id] => id.parse().map_or(Self::NotFound, Self::SessionDetail),
            ["account"] => Self::Account,
            _ => Self::NotFound,
        }
    }

    /// Canonical path for this route.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Login => "/login".to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Sessions => "/sessions".to_owned(),
            Self::SessionCreate => "/sessions/create".to_owned(),
            Self::SessionUpdate(id) => format!("/sessions/update/{id}"),
            Self::SessionDetail(id) => format!("/sessions/detail/{id}"),
            Self::Account => "/account".to_owned(),
            Self::NotFound => "/404".to_owned(),
        }
    }

    /// Routes behind the auth guard.
    #[must_use]
    pub fn requires_auth(self) -> bool {
        matches!(
            self,
            Self::Sessions | Self::SessionCreate | Self::SessionUpdate(_) | Self::SessionDetail(_) | Self::Account
        )
    }

    /// Routes behind the unauth guard (only meaningful when logged out).
    #[must_use]
    pub fn requires_guest(self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// Result of running a guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Route),
}

/// Lets logged-in users through; everyone else goes to `/login`.
#[must_use]
pub fn auth_guard(store: &SessionStore) -> GuardDecision {
    if store.is_logged_in() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(Route::Login)
    }
}

/// Lets logged-out users through; logged-in users go to `/sessions`.
#[must_use]
pub fn unauth_guard(store: &SessionStore) -> GuardDecision {
    if store.is_logged_in() {
        GuardDecision::Redirect(Route::Sessions)
    } else {
        GuardDecision::Allow
    }
}

/// Where navigation to `route` actually lands after the guards run.
#[must_use]
pub fn resolve(route: Route, store: &SessionStore) -> Route {
    let decision = if route.requires_auth() {
        auth_guard(store)
    } else if route.requires_guest() {
        unauth_guard(store)
    } else {
        GuardDecision::Allow
    };
    match decision {
        GuardDecision::Allow => route,
        GuardDecision::Redirect(target) => {
            tracing::debug!(from = %route, to = %target, "guard redirect");
            target
        }
    }
}
