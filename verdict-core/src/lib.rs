//! Verdict Core
//!
//! Core types and pure logic for the homework status poller.
//!
//! This crate contains:
//! - Domain types: cursor, homework records, verdicts, notification state
//! - DTOs: validation of the raw status API response into typed snapshots
//! - Errors: the closed set of ways a status response can be rejected
//! - Secrets: credential wrapper with redacted formatting

pub mod domain;
pub mod dto;
pub mod error;
pub mod secret;

pub use error::{Result, ValidationError};
pub use secret::Secret;
