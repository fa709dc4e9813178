//! Repository layer
//!
//! Repositories are stateless HTTP wrappers that abstract communication
//! with the status API. They are trait-based so the poll loop can be
//! driven by fakes in tests.

mod status;

pub use status::{HttpStatusRepository, StatusRepository};
