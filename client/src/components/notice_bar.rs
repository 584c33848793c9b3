//! Snackbar for confirmation notices.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let current = move || notices.get().current;

    view! {
        <Show when=move || current().is_some()>
            <div class="notice-bar" role="status">
                <span class="notice-bar__message">
                    {move || current().map(|n| n.message).unwrap_or_default()}
                </span>
                <button class="notice-bar__action" on:click=move |_| notices.update(NoticeState::dismiss)>
                    {move || current().map(|n| n.action).unwrap_or_default()}
                </button>
            </div>
        </Show>
    }
}
