//! Top navigation bar.
//!
//! Logged-out visitors see Login/Register; logged-in users see Sessions,
//! Account and Logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use yoga::ApiClient;

use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::util::outcome::apply_outcome;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let outcome = yoga::views::logout(api.store());
        apply_outcome(outcome, &navigate, notices);
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Yoga app"</span>
            <Show
                when=move || auth.get().logged_in
                fallback=|| {
                    view! {
                        <div class="nav-bar__links">
                            <a href="/login">"Login"</a>
                            <a href="/register">"Register"</a>
                        </div>
                    }
                }
            >
                <div class="nav-bar__links">
                    <a href="/sessions">"Sessions"</a>
                    <a href="/account">"Account"</a>
                    <a href="/login" on:click=on_logout.clone()>"Logout"</a>
                </div>
            </Show>
        </nav>
    }
}
