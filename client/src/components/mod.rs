//! Reusable UI component modules.

pub mod nav_bar;
pub mod notice_bar;
pub mod session_card;
pub mod text_field;
