//! Polling watermark

use std::fmt;

/// Time watermark (seconds since epoch) sent as `from_date`
///
/// The status API only reports homeworks whose state changed after
/// this instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor(pub i64);

impl Cursor {
    pub fn new(seconds: i64) -> Self {
        Self(seconds)
    }

    pub fn as_secs(self) -> i64 {
        self.0
    }
}

impl From<i64> for Cursor {
    fn from(seconds: i64) -> Self {
        Self(seconds)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
