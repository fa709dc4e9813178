//! Credential wrapper that never prints its value

use std::fmt;

/// An opaque token or identifier loaded from the environment
///
/// `Debug` and `Display` only show a short prefix, so a `Secret` can be
/// logged or embedded in a `Debug`-derived struct safely.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw value, for building requests
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Masked form: the first few characters followed by `***`
    pub fn masked(&self) -> String {
        const VISIBLE: usize = 4;
        let count = self.0.chars().count();
        if count <= VISIBLE * 2 {
            return "***".to_string();
        }
        let prefix: String = self.0.chars().take(VISIBLE).collect();
        format!("{}***", prefix)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({})", self.masked())
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
