//! Route guard wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page installs the same guard so auth redirects behave
//! identically across screens, including after logout from any page.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use yoga::{Route, SessionStore};

use crate::state::auth::AuthState;

/// Where `route` should bounce to, if the guards reject it.
pub fn redirect_for(route: Route, store: &SessionStore) -> Option<Route> {
    let target = yoga::route::resolve(route, store);
    (target != route).then_some(target)
}

/// Re-run the guards for `route` whenever auth state changes.
pub fn install_route_guard<F>(route: Route, auth: RwSignal<AuthState>, store: SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        auth.track();
        if let Some(target) = redirect_for(route, &store) {
            navigate(&target.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
