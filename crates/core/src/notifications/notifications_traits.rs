//! Notification store, delivery and service traits.
//!
//! Preferences live with the owner record in the external store, and
//! e-mail delivery belongs to the host application. The core only decides
//! who gets what.

use super::notifications_model::{NotificationPreferences, OwnerPreferences, PreferencesUpdate};
use super::reminders::RenewalReminder;
use crate::errors::Result;
use crate::reports::{GeneratedReport, ScheduledReport};

/// Trait defining the contract of the owner preference store.
pub trait NotificationPreferencesRepositoryTrait: Send + Sync {
    /// Stored preferences, or `None` when the owner is unknown.
    fn find_preferences(&self, owner_id: &str) -> Result<Option<NotificationPreferences>>;

    fn save_preferences(
        &self,
        owner_id: &str,
        preferences: &NotificationPreferences,
    ) -> Result<()>;

    /// Every known owner with their stored preferences.
    fn list_owner_preferences(&self) -> Result<Vec<OwnerPreferences>>;
}

/// Trait defining the delivery channel for owner notifications.
pub trait NotificationSenderTrait: Send + Sync {
    fn send_renewal_reminder(&self, owner_id: &str, reminder: &RenewalReminder) -> Result<()>;

    fn send_weekly_summary(&self, owner_id: &str, report: &GeneratedReport) -> Result<()>;

    fn send_scheduled_report(
        &self,
        owner_id: &str,
        schedule: &ScheduledReport,
        report: &GeneratedReport,
    ) -> Result<()>;
}

/// Trait defining the contract for notification preference operations.
pub trait NotificationServiceTrait: Send + Sync {
    /// Stored preferences, or the defaults for an unknown owner.
    fn get_preferences(&self, owner_id: &str) -> Result<NotificationPreferences>;

    /// Replaces the owner's preferences. Fails with `NotFound` for an
    /// unknown owner.
    fn update_preferences(
        &self,
        owner_id: &str,
        update: &PreferencesUpdate,
    ) -> Result<NotificationPreferences>;
}
