//! Helpers shared by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These isolate the glue between `yoga` view controllers and Leptos
//! signals/navigation so pages stay declarative.

pub mod form;
pub mod guard;
pub mod outcome;
