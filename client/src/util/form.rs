//! Binding `yoga` form state to input elements.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use leptos::prelude::*;
use yoga::form::{FormState, ValidationError};
use yoga::views::{LoginView, RegisterView, SessionFormView};

/// A view controller that owns a form.
pub trait HasForm {
    fn form(&self) -> &FormState;
    fn form_mut(&mut self) -> &mut FormState;
}

impl HasForm for LoginView {
    fn form(&self) -> &FormState {
        &self.form
    }

    fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }
}

impl HasForm for RegisterView {
    fn form(&self) -> &FormState {
        &self.form
    }

    fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }
}

impl HasForm for SessionFormView {
    fn form(&self) -> &FormState {
        &self.form
    }

    fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }
}

/// Reactive handle on one field of a form held in a signal.
#[derive(Clone, Copy)]
pub struct FieldBinding {
    pub value: Signal<String>,
    pub errors: Signal<Vec<ValidationError>>,
    pub on_input: Callback<String>,
}

pub fn bind<V>(state: RwSignal<V>, name: &'static str) -> FieldBinding
where
    V: HasForm + Send + Sync + 'static,
{
    FieldBinding {
        value: Signal::derive(move || state.with(|v| v.form().get(name).to_owned())),
        errors: Signal::derive(move || state.with(|v| v.form().errors(name))),
        on_input: Callback::new(move |value: String| state.update(|v| v.form_mut().set(name, value))),
    }
}

/// First failure on a field, as shown under the input.
pub fn field_message(errors: &[ValidationError]) -> Option<String> {
    let first = errors.first()?.to_string();
    let mut chars = first.chars();
    let head = chars.next()?;
    Some(head.to_uppercase().chain(chars).collect())
}
