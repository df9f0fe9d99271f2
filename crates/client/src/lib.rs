//! HTTP client and view-model for the doable API.
//!
//! [`TodoApi`] is a thin typed wrapper over the REST surface.
//! [`TodoViewModel`] keeps a local copy of the collection and re-fetches
//! it after every mutation so it always mirrors server state.

pub mod api;
pub mod view_model;

pub use api::{ClientError, TodoApi};
pub use view_model::TodoViewModel;
