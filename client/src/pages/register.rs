//! Registration page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use yoga::views::RegisterView;
use yoga::{ApiClient, Route};

use crate::components::text_field::TextField;
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::util::form::bind;
use crate::util::guard::install_route_guard;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    install_route_guard(Route::Register, auth, api.store().clone(), navigate.clone());

    let register = RwSignal::new(RegisterView::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || !register.with_untracked(RegisterView::can_submit) {
            return;
        }
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let mut view = register.get_untracked();
                let outcome = view.submit(&api).await;
                register.set(view);
                busy.set(false);
                crate::util::outcome::apply_outcome(outcome, &navigate, notices);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&api, &navigate, notices);
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Register"</h1>
                <TextField label="First name" binding=bind(register, "firstName")/>
                <TextField label="Last name" binding=bind(register, "lastName")/>
                <TextField label="Email" kind="email" binding=bind(register, "email")/>
                <TextField label="Password" kind="password" binding=bind(register, "password")/>
                <button type="submit" disabled=move || busy.get() || !register.with(RegisterView::can_submit)>
                    "Submit"
                </button>
                <Show when=move || register.get().on_error>
                    <p class="error">"An error occurred"</p>
                </Show>
            </form>
        </div>
    }
}
