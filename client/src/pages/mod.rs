//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page installs the route guard, holds its `yoga` view controller in a
//! signal, and runs controller actions on the local task queue. Rendering
//! details live in `components`.

pub mod account;
pub mod login;
pub mod not_found;
pub mod register;
pub mod session_detail;
pub mod session_form;
pub mod sessions;


use leptos_router::params::ParamsMap;

/// Numeric `:id` route parameter.
pub(crate) fn param_id(params: &ParamsMap) -> Option<u64> {
    params.get("id")?.parse().ok()
}
