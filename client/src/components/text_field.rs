//! Labelled input bound to one form field.
//!
//! Errors stay hidden until the field has been left once, matching the
//! usual touched-then-validate behavior of form frameworks.

use leptos::prelude::*;

use crate::util::form::{FieldBinding, field_message};

#[component]
pub fn TextField(
    label: &'static str,
    binding: FieldBinding,
    #[prop(into, default = "text".into())] kind: Signal<&'static str>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let touched = RwSignal::new(false);
    let message = move || {
        if touched.get() {
            field_message(&binding.errors.get())
        } else {
            None
        }
    };

    let input = if multiline {
        view! {
            <textarea
                class="field__input"
                rows="4"
                prop:value=move || binding.value.get()
                on:input=move |ev| binding.on_input.run(event_target_value(&ev))
                on:blur=move |_| touched.set(true)
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class="field__input"
                type=move || kind.get()
                prop:value=move || binding.value.get()
                on:input=move |ev| binding.on_input.run(event_target_value(&ev))
                on:blur=move |_| touched.set(true)
            />
        }
        .into_any()
    };

    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            {input}
            <Show when=move || message().is_some()>
                <span class="field__error">{move || message().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
