//! Scheduler layer for the runner
//!
//! This layer owns the polling loop: it drives one fetch-diff-notify
//! cycle per interval and holds the only mutable state in the process,
//! the cursor and the last delivered message.

pub mod poller;

pub use poller::StatusPoller;
