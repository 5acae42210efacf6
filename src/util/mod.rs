//! Small cross-cutting helpers.

pub mod debounce;
pub mod upload;
