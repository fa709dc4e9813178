//! Status poller
//!
//! Polls the status API at a fixed interval, turns each response into a
//! single message, and notifies the chat only when that message differs
//! from the last one delivered. Failures are turned into messages too
//! and go through the same deduplication.
//!
//! The cursor and the notification state are owned here and change only
//! after the messenger confirms a delivery.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};
use verdict_core::ValidationError;
use verdict_core::domain::notification::{STATUS_UNCHANGED, failure_message};
use verdict_core::domain::{Cursor, NotificationState, parse_status, should_notify};
use verdict_core::dto::validate;

use crate::error::{ErrorPolicy, PollError};
use crate::repository::StatusRepository;
use crate::service::{Notifier, Sleeper};

/// Result of a single poll cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The message matched the last delivered one; nothing was sent
    Unchanged,
    /// A new message was delivered
    Notified,
    /// A new message was produced but the messenger did not accept it
    DeliveryFailed,
}

/// What a successful fetch-validate-parse pass produced
struct Observation {
    message: String,
    current_date: Option<i64>,
}

/// Poller that watches one homework status feed
pub struct StatusPoller {
    poll_interval: Duration,
    statuses: Arc<dyn StatusRepository>,
    notifier: Arc<dyn Notifier>,
    sleeper: Arc<dyn Sleeper>,
    cursor: Cursor,
    notified: NotificationState,
}

impl StatusPoller {
    /// Creates a new status poller starting at `start_cursor`
    pub fn new(
        poll_interval: Duration,
        start_cursor: Cursor,
        statuses: Arc<dyn StatusRepository>,
        notifier: Arc<dyn Notifier>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self {
            poll_interval,
            statuses,
            notifier,
            sleeper,
            cursor: start_cursor,
            notified: NotificationState::new(),
        }
    }

    #[allow(dead_code)]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[allow(dead_code)]
    pub fn notification_state(&self) -> &NotificationState {
        &self.notified
    }

    /// Starts the polling loop
    ///
    /// Only returns if a cycle produces an error whose policy is fatal.
    pub async fn run(&mut self) -> Result<(), PollError> {
        info!(
            "Starting status poller (interval: {:?}, from_date: {})",
            self.poll_interval, self.cursor
        );

        loop {
            self.cycle().await?;
        }
    }

    /// Runs exactly `cycles` cycles, sleeping after each one
    #[allow(dead_code)]
    pub async fn run_cycles(&mut self, cycles: usize) -> Result<Vec<CycleOutcome>, PollError> {
        let mut outcomes = Vec::with_capacity(cycles);
        for _ in 0..cycles {
            outcomes.push(self.cycle().await?);
        }
        Ok(outcomes)
    }

    async fn cycle(&mut self) -> Result<CycleOutcome, PollError> {
        let outcome = self.poll_once().await;
        self.sleeper.sleep(self.poll_interval).await;
        outcome
    }

    /// Performs a single poll cycle without sleeping
    pub async fn poll_once(&mut self) -> Result<CycleOutcome, PollError> {
        match self.observe().await {
            Ok(observation) => Ok(self
                .deliver(observation.message, observation.current_date)
                .await),
            Err(err) => self.handle_error(err).await,
        }
    }

    /// Fetches, validates and parses the newest homework
    async fn observe(&self) -> Result<Observation, PollError> {
        debug!("Polling homework statuses from {}", self.cursor);

        let raw = self.statuses.fetch(self.cursor).await?;
        let snapshot = validate(&raw)?;

        let message = match snapshot.latest() {
            Some(item) => parse_status(item)?,
            None => {
                debug!("No homework updates since {}", self.cursor);
                STATUS_UNCHANGED.to_string()
            }
        };

        Ok(Observation {
            message,
            current_date: snapshot.current_date,
        })
    }

    async fn handle_error(&mut self, err: PollError) -> Result<CycleOutcome, PollError> {
        match &err {
            PollError::Fetch(e) => error!("Failed to fetch homework statuses: {}", e),
            PollError::Validation(ValidationError::UnknownStatus(label)) => {
                error!("Unknown homework status: {}", label)
            }
            PollError::Validation(e) => error!("Invalid status API response: {}", e),
            PollError::MissingCredential { .. } => error!("{}", err),
        }

        match err.policy() {
            ErrorPolicy::Fatal => Err(err),
            ErrorPolicy::Notify => Ok(self.deliver(failure_message(&err), None).await),
        }
    }

    /// Sends `message` if it is new; commits state only on delivery
    async fn deliver(&mut self, message: String, current_date: Option<i64>) -> CycleOutcome {
        if !should_notify(&message, &self.notified) {
            debug!("Message unchanged since last notification, skipping");
            return CycleOutcome::Unchanged;
        }

        if !self.notifier.send(&message).await {
            return CycleOutcome::DeliveryFailed;
        }

        self.notified.record_sent(message);
        if let Some(date) = current_date {
            debug!("Advancing cursor {} -> {}", self.cursor, date);
            self.cursor = Cursor::new(date);
        }

        CycleOutcome::Notified
    }
}
