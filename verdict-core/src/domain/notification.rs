//! Notification state and change detection
//!
//! The poller remembers the last text it actually delivered and only
//! sends a new message when the candidate text differs from it. Status
//! messages and failure messages share the same slot, so a failure that
//! repeats verbatim across cycles is reported once.

use std::fmt;

/// Message used when the status API reports no homework updates
pub const STATUS_UNCHANGED: &str = "Статус проверки домашней работы не изменился";

/// Longest text the messenger accepts in one message, in characters
pub const MAX_MESSAGE_CHARS: usize = 4096;

const FAILURE_PREFIX: &str = "Сбой в работе программы: ";
const ELLIPSIS: char = '…';

/// Builds the user-facing message for a per-cycle failure
///
/// The result never exceeds [`MAX_MESSAGE_CHARS`].
pub fn failure_message(error: &impl fmt::Display) -> String {
    truncate_chars(&format!("{}{}", FAILURE_PREFIX, error), MAX_MESSAGE_CHARS)
}

/// Cuts `text` to at most `max_chars` characters, ending with `…` if cut
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push(ELLIPSIS);
    truncated
}

/// Last successfully delivered notification text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    last_sent: Option<String>,
}

impl NotificationState {
    /// Creates the "nothing sent yet" state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_sent(&self) -> Option<&str> {
        self.last_sent.as_deref()
    }

    /// Records a message that the messenger confirmed
    pub fn record_sent(&mut self, message: impl Into<String>) {
        self.last_sent = Some(message.into());
    }
}

/// Returns `true` when `candidate` differs from the last delivered text
pub fn should_notify(candidate: &str, previous: &NotificationState) -> bool {
    previous.last_sent() != Some(candidate)
}
