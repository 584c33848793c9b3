//! Login page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use yoga::views::LoginView;
use yoga::{ApiClient, Route};

use crate::components::text_field::TextField;
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::util::form::bind;
use crate::util::guard::install_route_guard;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    install_route_guard(Route::Login, auth, api.store().clone(), navigate.clone());

    let login = RwSignal::new(LoginView::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || !login.with_untracked(LoginView::can_submit) {
            return;
        }
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let mut view = login.get_untracked();
                let outcome = view.submit(&api).await;
                login.set(view);
                busy.set(false);
                crate::util::outcome::apply_outcome(outcome, &navigate, notices);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&api, &navigate, notices);
    };

    let password_kind = Signal::derive(move || if login.get().hide_password { "password" } else { "text" });

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Login"</h1>
                <TextField label="Email" kind="email" binding=bind(login, "email")/>
                <TextField label="Password" kind=password_kind binding=bind(login, "password")/>
                <button
                    type="button"
                    class="auth-card__toggle"
                    on:click=move |_| login.update(LoginView::toggle_password_visibility)
                >
                    {move || if login.get().hide_password { "Show password" } else { "Hide password" }}
                </button>
                <button type="submit" disabled=move || busy.get() || !login.with(LoginView::can_submit)>
                    "Submit"
                </button>
                <Show when=move || login.get().on_error>
                    <p class="error">"An error occurred"</p>
                </Show>
            </form>
        </div>
    }
}
