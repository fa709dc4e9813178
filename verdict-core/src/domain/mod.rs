//! Core domain types
//!
//! Entities the poll loop reasons about: the time watermark it polls
//! from, the homework records it reads, and the notification it last
//! delivered.

pub mod cursor;
pub mod homework;
pub mod notification;

pub use cursor::Cursor;
pub use homework::{HomeworkStatus, ItemRecord, parse_status};
pub use notification::{NotificationState, should_notify};
