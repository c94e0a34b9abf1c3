//! Notification preference models.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REMINDER_DAYS;

/// An owner's notification switches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub email_notifications: bool,
    pub browser_notifications: bool,
    pub renewal_reminders: bool,
    pub weekly_summary: bool,
    /// Fixed lead time; not user-editable.
    #[serde(default = "default_reminder_days")]
    pub reminder_days: u32,
}

fn default_reminder_days() -> u32 {
    DEFAULT_REMINDER_DAYS
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        NotificationPreferences {
            email_notifications: true,
            browser_notifications: true,
            renewal_reminders: true,
            weekly_summary: false,
            reminder_days: DEFAULT_REMINDER_DAYS,
        }
    }
}

impl NotificationPreferences {
    /// Renewal reminder e-mails need both e-mail and the reminder switch.
    pub fn wants_renewal_reminders(&self) -> bool {
        self.email_notifications && self.renewal_reminders
    }

    /// Weekly summary e-mails need both e-mail and the summary switch.
    pub fn wants_weekly_summary(&self) -> bool {
        self.email_notifications && self.weekly_summary
    }
}

/// A preference switch as sent by a client.
///
/// Booleans are taken as-is. Strings are true only when they read "true"
/// ignoring case. Any other JSON value falls back to the field default.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PreferenceFlag {
    Bool(bool),
    Text(String),
    Other(IgnoredAny),
}

impl PreferenceFlag {
    fn resolve(flag: Option<&PreferenceFlag>, default: bool) -> bool {
        match flag {
            Some(PreferenceFlag::Bool(value)) => *value,
            Some(PreferenceFlag::Text(text)) => text.trim().eq_ignore_ascii_case("true"),
            Some(PreferenceFlag::Other(_)) | None => default,
        }
    }
}

/// Full replacement of an owner's preferences.
///
/// Missing or unreadable switches reset to their defaults rather than
/// keeping the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    #[serde(default)]
    pub email_notifications: Option<PreferenceFlag>,
    #[serde(default)]
    pub browser_notifications: Option<PreferenceFlag>,
    #[serde(default)]
    pub renewal_reminders: Option<PreferenceFlag>,
    #[serde(default)]
    pub weekly_summary: Option<PreferenceFlag>,
}

impl PreferencesUpdate {
    pub fn resolve(&self) -> NotificationPreferences {
        let defaults = NotificationPreferences::default();
        NotificationPreferences {
            email_notifications: PreferenceFlag::resolve(
                self.email_notifications.as_ref(),
                defaults.email_notifications,
            ),
            browser_notifications: PreferenceFlag::resolve(
                self.browser_notifications.as_ref(),
                defaults.browser_notifications,
            ),
            renewal_reminders: PreferenceFlag::resolve(
                self.renewal_reminders.as_ref(),
                defaults.renewal_reminders,
            ),
            weekly_summary: PreferenceFlag::resolve(
                self.weekly_summary.as_ref(),
                defaults.weekly_summary,
            ),
            reminder_days: defaults.reminder_days,
        }
    }
}

/// Preferences of one known owner, as listed by the preference store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OwnerPreferences {
    pub owner_id: String,
    pub preferences: NotificationPreferences,
}
