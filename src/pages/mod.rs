//! Routed pages.

pub mod ingredients;
pub mod login;
