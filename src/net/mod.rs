//! Network layer: typed request/response schemas and fetch wrappers.
//!
//! DESIGN
//! ======
//! Every response body is parsed into an explicit serde schema at this
//! boundary; a shape mismatch surfaces as [`api::ApiError::Decode`]
//! instead of propagating dynamic values into the UI.

pub mod api;
pub mod types;
