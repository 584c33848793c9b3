//! Reactive state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal` per state struct. The structs stay plain
//! data so their transitions are testable without a reactive runtime.

pub mod auth;
pub mod notice;
