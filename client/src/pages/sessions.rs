//! Session list page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use yoga::views::ListView;
use yoga::{ApiClient, Route};

use crate::components::session_card::SessionCard;
use crate::state::auth::AuthState;
use crate::util::guard::install_route_guard;

#[component]
pub fn SessionsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(Route::Sessions, auth, api.store().clone(), use_navigate());

    let list = RwSignal::new(ListView::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let mut view = ListView::new();
        view.load(&api).await;
        list.set(view);
        loading.set(false);
    });
    #[cfg(not(feature = "csr"))]
    let _ = api;

    view! {
        <section class="sessions-page">
            <header class="sessions-page__header">
                <h1>"Rentals available"</h1>
                <Show when=move || list.with(ListView::can_manage)>
                    <a class="button" href=Route::SessionCreate.path()>"Create"</a>
                </Show>
            </header>
            <Show when=move || loading.get()>
                <p class="loading">"Loading sessions..."</p>
            </Show>
            <Show when=move || list.get().on_error>
                <p class="error">"Sessions could not be loaded."</p>
            </Show>
            <div class="sessions-page__items">
                {move || {
                    let view = list.get();
                    let can_edit = view.can_manage();
                    view.sessions
                        .into_iter()
                        .map(|session| view! { <SessionCard session=session can_edit=can_edit/> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
