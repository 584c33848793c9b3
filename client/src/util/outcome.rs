//! Performing what a view action asked for.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use yoga::views::{Navigation, Notice, Outcome};

use crate::state::notice::NoticeState;

/// Path to push for an outcome, if it navigates to a route.
pub fn target_path(outcome: &Outcome) -> Option<String> {
    outcome.route().map(yoga::Route::path)
}

/// Show the notice (if any), then navigate.
pub fn apply_outcome<F>(outcome: Outcome, navigate: &F, notices: RwSignal<NoticeState>)
where
    F: Fn(&str, NavigateOptions),
{
    if let Some(notice) = outcome.notice.clone() {
        show_notice(notices, notice);
    }
    match outcome.navigation {
        Some(Navigation::To(route)) => navigate(&route.path(), NavigateOptions::default()),
        Some(Navigation::Back) => history_back(),
        None => {}
    }
}

/// Put a notice in the snackbar and schedule its dismissal.
pub fn show_notice(notices: RwSignal<NoticeState>, notice: Notice) {
    let duration = notice.duration;
    let Some(generation) = notices.try_update(|state| state.show(notice)) else {
        return;
    };
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(duration).await;
        notices.update(|state| state.expire(generation));
    });
    #[cfg(not(feature = "csr"))]
    let _ = (duration, generation);
}

fn history_back() {
    #[cfg(feature = "csr")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }
}
