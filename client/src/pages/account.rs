//! Account page: profile and self-deletion.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use yoga::types::long_date;
use yoga::views::AccountView;
use yoga::{ApiClient, Route};

use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::util::guard::install_route_guard;

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

/// Self-deletion is offered only once a non-admin profile has loaded.
pub(crate) fn can_delete(account: &AccountView) -> bool {
    !account.on_error && account.user.as_ref().is_some_and(|user| !user.admin)
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    install_route_guard(Route::Account, auth, api.store().clone(), navigate.clone());

    let account = RwSignal::new(AccountView::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let mut view = AccountView::new();
            view.load(&api).await;
            account.set(view);
        });
    }

    let on_delete = move |_: leptos::ev::MouseEvent| {
        if busy.get_untracked() || !account.with_untracked(can_delete) {
            return;
        }
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let mut view = account.get_untracked();
                let outcome = view.delete(&api).await;
                account.set(view);
                busy.set(false);
                crate::util::outcome::apply_outcome(outcome, &navigate, notices);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&api, &navigate, notices);
    };

    view! {
        <section class="account-page">
            <h1>"User information"</h1>
            <Show when=move || account.get().on_error>
                <p class="error">"Account could not be loaded."</p>
            </Show>
            {move || {
                let state = account.get();
                let deletable = can_delete(&state);
                state.user.map(|user| {
                    let created = user.created_at.map(|ts| long_date(ts.date())).unwrap_or_default();
                    let updated = user.updated_at.map(|ts| long_date(ts.date())).unwrap_or_default();
                    let admin = user.admin;
                    let on_delete = on_delete.clone();
                    view! {
                        <div class="account-page__profile">
                            <p>"Name: " {user.display_name()}</p>
                            <p>"Email: " {user.email}</p>
                            <Show when=move || admin>
                                <p class="account-page__admin">"You are admin"</p>
                            </Show>
                            <p>"Create at: " {created}</p>
                            <p>"Last update: " {updated}</p>
                        </div>
                        {deletable.then(|| view! {
                            <div class="account-page__delete">
                                <p>"Delete my account:"</p>
                                <button
                                    class="button button--danger"
                                    disabled=move || busy.get()
                                    on:click=on_delete
                                >
                                    "Delete"
                                </button>
                            </div>
                        })}
                    }
                })
            }}
        </section>
    }
}
