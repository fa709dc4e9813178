//! Homework domain types
//!
//! A homework record as reported by the status API, the closed set of
//! review states it can be in, and the message shown to the user when
//! that state changes.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ValidationError};

/// Review state of a submitted homework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// All known statuses, in API documentation order
    pub const ALL: [HomeworkStatus; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Label used by the status API
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict for this status
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeworkStatus {
    type Err = ValidationError;

    fn from_str(label: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == label)
            .ok_or_else(|| ValidationError::UnknownStatus(label.to_string()))
    }
}

/// One homework entry from the `homeworks` list
///
/// Only the fields the poller needs are kept; everything else the API
/// returns is ignored. Both fields are optional at this layer so that a
/// missing one is reported by [`parse_status`] as a missing field rather
/// than as a shape error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemRecord {
    pub homework_name: Option<String>,
    pub status: Option<String>,
}

impl ItemRecord {
    pub fn new(homework_name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            homework_name: Some(homework_name.into()),
            status: Some(status.into()),
        }
    }
}

/// Builds the status-change message for a homework record
///
/// Fails with [`ValidationError::MissingField`] if the name or status is
/// absent, and with [`ValidationError::UnknownStatus`] if the status
/// label is not one of [`HomeworkStatus::ALL`].
pub fn parse_status(item: &ItemRecord) -> Result<String> {
    let name = item
        .homework_name
        .as_deref()
        .ok_or(ValidationError::MissingField("homework_name"))?;
    let label = item
        .status
        .as_deref()
        .ok_or(ValidationError::MissingField("status"))?;

    let status: HomeworkStatus = label.parse()?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}
