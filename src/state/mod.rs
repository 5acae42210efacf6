//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `ingredients`, `notifications`) so
//! individual components can depend on small focused models. Each struct is
//! plain data held in an `RwSignal` context provided by the app root; all
//! transitions are synchronous methods so they can be unit tested without a
//! browser.

pub mod ingredients;
pub mod notifications;
pub mod session;
