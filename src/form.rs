//! Declarative form validation.
//!
//! DESIGN
//! ======
//! A form is a static table of [`FieldSpec`]s; views never hand-write checks.
//! Validator semantics follow the usual browser-form conventions: only
//! `Required` reports an empty value, the length and email validators pass
//! empty input through.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

const EMAIL_MAX_LEN: usize = 254;
const EMAIL_LOCAL_MAX_LEN: usize = 64;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap_or_else(|e| unreachable!("email pattern is a literal: {e}"))
});

/// One rule attached to a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validator {
    Required,
    Email,
    MinLength(usize),
    MaxLength(usize),
}

/// A failed rule, with the numbers a template needs to explain it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("this field is required")]
    Required,
    #[error("enter a valid email address")]
    Email,
    #[error("must be at least {required} characters")]
    MinLength { required: usize, actual: usize },
    #[error("must be at most {required} characters")]
    MaxLength { required: usize, actual: usize },
}

/// Which kind of rule failed, for `has_error` style lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    Email,
    MinLength,
    MaxLength,
}

impl ValidationError {
    #[must_use]
    pub fn kind(self) -> ErrorKind {
        match self {
            Self::Required => ErrorKind::Required,
            Self::Email => ErrorKind::Email,
            Self::MinLength { .. } => ErrorKind::MinLength,
            Self::MaxLength { .. } => ErrorKind::MaxLength,
        }
    }
}

impl Validator {
    /// Check `value`, returning the failure if any.
    ///
    /// Lengths are counted in UTF-16 code units, as browser inputs count
    /// them, so a character outside the BMP counts twice.
    #[must_use]
    pub fn check(self, value: &str) -> Option<ValidationError> {
        let actual = value.encode_utf16().count();
        match self {
            Self::Required => value.is_empty().then_some(ValidationError::Required),
            _ if value.is_empty() => None,
            Self::Email => (!is_email(value)).then_some(ValidationError::Email),
            Self::MinLength(required) => (actual < required).then_some(ValidationError::MinLength { required, actual }),
            Self::MaxLength(required) => (actual > required).then_some(ValidationError::MaxLength { required, actual }),
        }
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    value.len() <= EMAIL_MAX_LEN && local.len() <= EMAIL_LOCAL_MAX_LEN && EMAIL_PATTERN.is_match(value)
}

/// A named field and its rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub validators: &'static [Validator],
}

impl FieldSpec {
    #[must_use]
    pub const fn new(name: &'static str, validators: &'static [Validator]) -> Self {
        Self { name, validators }
    }
}

// =============================================================================
// FORM DEFINITIONS
// =============================================================================

pub const LOGIN_FORM: &[FieldSpec] = &[
    FieldSpec::new("email", &[Validator::Required, Validator::Email]),
    FieldSpec::new("password", &[Validator::Required, Validator::MinLength(3)]),
];

pub const REGISTER_FORM: &[FieldSpec] = &[
    FieldSpec::new("email", &[Validator::Required, Validator::Email]),
    FieldSpec::new("firstName", &[Validator::Required, Validator::MinLength(3), Validator::MaxLength(20)]),
    FieldSpec::new("lastName", &[Validator::Required, Validator::MinLength(3), Validator::MaxLength(20)]),
    FieldSpec::new("password", &[Validator::Required, Validator::MinLength(3), Validator::MaxLength(40)]),
];

pub const SESSION_FORM: &[FieldSpec] = &[
    FieldSpec::new("name", &[Validator::Required]),
    FieldSpec::new("date", &[Validator::Required]),
    FieldSpec::new("teacher_id", &[Validator::Required]),
    FieldSpec::new("description", &[Validator::Required, Validator::MaxLength(2000)]),
];

// =============================================================================
// FORM STATE
// =============================================================================

/// Current values of a declared form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    specs: &'static [FieldSpec],
    values: BTreeMap<&'static str, String>,
}

impl FormState {
    /// A form with every declared field empty.
    #[must_use]
    pub fn new(specs: &'static [FieldSpec]) -> Self {
        let values = specs.iter().map(|spec| (spec.name, String::new())).collect();
        Self { specs, values }
    }

    /// Set a field. Undeclared names are ignored.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value.into();
        }
    }

    /// Builder form of [`FormState::set`].
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Current value of a field (empty for undeclared names).
    #[must_use]
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// Every failed rule on one field.
    #[must_use]
    pub fn errors(&self, name: &str) -> Vec<ValidationError> {
        let Some(spec) = self.specs.iter().find(|spec| spec.name == name) else {
            return Vec::new();
        };
        let value = self.get(name);
        spec.validators.iter().filter_map(|v| v.check(value)).collect()
    }

    #[must_use]
    pub fn has_error(&self, name: &str, kind: ErrorKind) -> bool {
        self.errors(name).iter().any(|err| err.kind() == kind)
    }

    /// Whether every field passes every rule. Gates submission.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.specs.iter().all(|spec| self.errors(spec.name).is_empty())
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }
}
