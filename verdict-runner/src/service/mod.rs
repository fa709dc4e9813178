//! Service layer
//!
//! Side-effecting collaborators of the poll loop: delivering messages
//! and waiting between cycles. Both are trait-based so tests can run
//! cycles without network access or real delays.

mod notifier;
mod sleeper;

// Re-export traits
pub use notifier::Notifier;
pub use sleeper::Sleeper;

// Re-export implementations
pub use notifier::TelegramNotifier;
pub use sleeper::TokioSleeper;
