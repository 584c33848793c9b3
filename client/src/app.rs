//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};
use yoga::{ApiClient, SessionStore};

use crate::components::{nav_bar::NavBar, notice_bar::NoticeBar};
use crate::net::{build_config, transport::GlooTransport};
use crate::pages::{
    account::AccountPage, login::LoginPage, not_found::NotFoundPage, register::RegisterPage,
    session_detail::SessionDetailPage, session_form::SessionFormPage, sessions::SessionsPage,
};
use crate::state::{auth::AuthState, notice::NoticeState};

/// Root application component.
///
/// Owns the one [`SessionStore`] and [`ApiClient`] for the page and mirrors
/// the store's logged-in flag into an [`AuthState`] signal.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new();
    let api = ApiClient::new(build_config(), Arc::new(GlooTransport), store.clone());
    let auth = RwSignal::new(AuthState::from_store(&store));
    let notices = RwSignal::new(NoticeState::default());

    #[cfg(feature = "csr")]
    {
        let store = store.clone();
        let mut changes = store.subscribe();
        leptos::task::spawn_local(async move {
            while changes.changed().await.is_ok() {
                let state = AuthState::from_store(&store);
                log::info!("auth state changed: logged_in={}", state.logged_in);
                auth.set(state);
            }
        });
    }

    provide_context(api);
    provide_context(auth);
    provide_context(notices);

    view! {
        <Title text="Yoga app"/>

        <Router>
            <NavBar/>
            <main class="content">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("sessions") view=SessionsPage/>
                    <Route path=(StaticSegment("sessions"), StaticSegment("create")) view=|| view! { <SessionFormPage/> }/>
                    <Route
                        path=(StaticSegment("sessions"), StaticSegment("update"), ParamSegment("id"))
                        view=|| view! { <SessionFormPage update=true/> }
                    />
                    <Route
                        path=(StaticSegment("sessions"), StaticSegment("detail"), ParamSegment("id"))
                        view=SessionDetailPage
                    />
                    <Route path=StaticSegment("account") view=AccountPage/>
                    <Route path=StaticSegment("404") view=NotFoundPage/>
                </Routes>
            </main>
            <NoticeBar/>
        </Router>
    }
}
