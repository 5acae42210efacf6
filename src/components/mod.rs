//! Leptos view components.

pub mod create_ingredient_modal;
pub mod edit_ingredient_modal;
pub mod ingredient_detail;
pub mod ingredient_table;
pub mod toast_host;
