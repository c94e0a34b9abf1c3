//! SubSentry Core - Subscription analytics, report assembly and notifications.
//!
//! This crate contains the pure analytics logic for SubSentry.
//! It performs no I/O: subscriptions, preferences and schedules are read
//! through store traits, and e-mail goes out through a sender trait, all
//! implemented by the host application.

pub mod analytics;
pub mod constants;
pub mod errors;
pub mod notifications;
pub mod reports;
pub mod subscriptions;
pub mod tasks;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
