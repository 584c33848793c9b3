//! Create/update session page (admin only).

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use yoga::views::{FormMode, SessionFormView};
use yoga::{ApiClient, Route};

use crate::components::text_field::TextField;
use crate::pages::param_id;
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::util::form::bind;
use crate::util::guard::install_route_guard;

/// `/sessions/create` and `/sessions/update/:id`.
#[component]
pub fn SessionFormPage(#[prop(optional)] update: bool) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let mode = if update {
        match param_id(&params.read_untracked()) {
            Some(id) => FormMode::Update(id),
            None => return view! { <crate::pages::not_found::NotFoundPage/> }.into_any(),
        }
    } else {
        FormMode::Create
    };
    install_route_guard(mode.route(), auth, api.store().clone(), navigate.clone());

    let loaded = RwSignal::new(None::<SessionFormView>);

    #[cfg(feature = "csr")]
    {
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match SessionFormView::open(mode, &api).await {
                Ok(view) => loaded.set(Some(view)),
                Err(target) => navigate(&target.path(), leptos_router::NavigateOptions::default()),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = (&api, &navigate);

    let title = match mode {
        FormMode::Create => "Create session",
        FormMode::Update(_) => "Update session",
    };

    view! {
        <section class="form-page">
            <h1>{title}</h1>
            {move || match loaded.get() {
                Some(view) => view! { <SessionEditor initial=view/> }.into_any(),
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
            }}
        </section>
    }
    .into_any()
}

/// The form body, mounted once the teacher options (and session) are in.
#[component]
fn SessionEditor(initial: SessionFormView) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let editor = RwSignal::new(initial);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || !editor.with_untracked(SessionFormView::can_submit) {
            return;
        }
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let mut view = editor.get_untracked();
                let outcome = view.submit(&api).await;
                editor.set(view);
                busy.set(false);
                crate::util::outcome::apply_outcome(outcome, &navigate, notices);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&api, &navigate, notices);
    };

    let teacher = bind(editor, "teacher_id");
    let options = move || {
        editor
            .get()
            .teachers
            .into_iter()
            .map(|t| {
                let id = t.id.to_string();
                let selected = teacher.value.get() == id;
                view! { <option value=id selected=selected>{t.full_name()}</option> }
            })
            .collect_view()
    };

    view! {
        <form class="session-form" on:submit=on_submit>
            <TextField label="Name" binding=bind(editor, "name")/>
            <TextField label="Date" kind="date" binding=bind(editor, "date")/>
            <label class="field">
                <span class="field__label">"Teacher"</span>
                <select
                    class="field__input"
                    prop:value=move || teacher.value.get()
                    on:change=move |ev| teacher.on_input.run(event_target_value(&ev))
                >
                    <option value="" disabled=true>"Select a teacher"</option>
                    {options}
                </select>
            </label>
            <TextField label="Description" multiline=true binding=bind(editor, "description")/>
            <a class="button" href=Route::Sessions.path()>"Back"</a>
            <button type="submit" disabled=move || busy.get() || !editor.with(SessionFormView::can_submit)>
                "Save"
            </button>
            <Show when=move || editor.get().on_error>
                <p class="error">"An error occurred"</p>
            </Show>
        </form>
    }
}
