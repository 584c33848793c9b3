//! Session detail page: participation toggle and admin delete.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use yoga::types::long_date;
use yoga::views::DetailView;
use yoga::{ApiClient, Route};

use crate::pages::param_id;
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::util::guard::install_route_guard;
use crate::util::outcome::apply_outcome;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Action {
    Participate,
    UnParticipate,
    Delete,
}

#[component]
pub fn SessionDetailPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let params = use_params_map();
    let Some(id) = param_id(&params.read_untracked()) else {
        return view! { <crate::pages::not_found::NotFoundPage/> }.into_any();
    };
    install_route_guard(Route::SessionDetail(id), auth, api.store().clone(), navigate.clone());

    let Some(initial) = DetailView::new(id, api.store()) else {
        return view! { <p class="loading">"Redirecting..."</p> }.into_any();
    };
    let detail = RwSignal::new(initial);
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let mut view = detail.get_untracked();
            view.fetch(&api).await;
            detail.set(view);
        });
    }

    let run = move |action: Action| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let mut view = detail.get_untracked();
                let outcome = match action {
                    Action::Participate => {
                        view.participate(&api).await;
                        None
                    }
                    Action::UnParticipate => {
                        view.un_participate(&api).await;
                        None
                    }
                    Action::Delete => Some(view.delete(&api).await),
                };
                detail.set(view);
                busy.set(false);
                if let Some(outcome) = outcome {
                    apply_outcome(outcome, &navigate, notices);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&api, &navigate, action);
    };
    let navigate_back = use_navigate();

    view! {
        <section class="detail-page">
            <button
                class="detail-page__back"
                on:click=move |_| apply_outcome(detail.with_untracked(DetailView::back), &navigate_back, notices)
            >
                "Back"
            </button>
            <Show when=move || detail.get().on_error>
                <p class="error">"Something went wrong with this session."</p>
            </Show>
            {move || {
                let view = detail.get();
                let session = view.session.clone()?;
                let teacher = view
                    .teacher
                    .as_ref()
                    .map(yoga::types::Teacher::full_name)
                    .unwrap_or_default();
                let attendees = session.participant_count();
                let action = if view.is_admin {
                    let run = run.clone();
                    view! {
                        <button class="button button--danger" on:click=move |_| run(Action::Delete)>
                            "Delete"
                        </button>
                    }
                    .into_any()
                } else if view.is_participate {
                    let run = run.clone();
                    view! {
                        <button class="button" on:click=move |_| run(Action::UnParticipate)>
                            "Do not participate"
                        </button>
                    }
                    .into_any()
                } else {
                    let run = run.clone();
                    view! {
                        <button class="button" on:click=move |_| run(Action::Participate)>
                            "Participate"
                        </button>
                    }
                    .into_any()
                };
                Some(view! {
                    <article class="detail-page__session">
                        <h1>{session.name}</h1>
                        <p class="detail-page__teacher">{teacher}</p>
                        <p>{attendees} " attendees"</p>
                        <p>{long_date(session.date)}</p>
                        <p class="detail-page__description">{session.description}</p>
                        {action}
                    </article>
                })
            }}
        </section>
    }
    .into_any()
}
