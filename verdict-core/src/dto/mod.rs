//! Data transfer objects
//!
//! Typed views over payloads exchanged with external APIs.

pub mod status;
pub mod telegram;

pub use status::{StatusSnapshot, validate};
