//! Card for one session in the list.

use leptos::prelude::*;
use yoga::Route;
use yoga::types::{Session, long_date};

#[component]
pub fn SessionCard(session: Session, #[prop(optional)] can_edit: bool) -> impl IntoView {
    let detail = Route::SessionDetail(session.id).path();
    let edit = Route::SessionUpdate(session.id).path();

    view! {
        <article class="session-card">
            <h2 class="session-card__name">{session.name}</h2>
            <p class="session-card__date">"Session on " {long_date(session.date)}</p>
            <p class="session-card__description">{session.description}</p>
            <div class="session-card__actions">
                <a class="button" href=detail>"Detail"</a>
                <Show when=move || can_edit>
                    <a class="button" href=edit.clone()>"Edit"</a>
                </Show>
            </div>
        </article>
    }
}
