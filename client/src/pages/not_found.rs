use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found !"</h1>
            <a href="/sessions">"Back to sessions"</a>
        </div>
    }
}
