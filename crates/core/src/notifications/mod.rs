//! Notifications module - owner preferences and reminder content.

mod notifications_model;
mod notifications_service;
mod notifications_traits;
mod reminders;

#[cfg(test)]
mod notifications_service_tests;

pub use notifications_model::{
    NotificationPreferences, OwnerPreferences, PreferenceFlag, PreferencesUpdate,
};
pub use notifications_service::NotificationService;
pub use notifications_traits::{
    NotificationPreferencesRepositoryTrait, NotificationSenderTrait, NotificationServiceTrait,
};
pub use reminders::{build_renewal_reminder, weekly_summary_request, ReminderLine, RenewalReminder};
