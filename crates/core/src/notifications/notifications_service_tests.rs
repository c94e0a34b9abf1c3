//! Unit tests for notification preferences.

#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result};
    use crate::notifications::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MockPreferencesRepository {
        stored: Mutex<HashMap<String, NotificationPreferences>>,
    }

    impl MockPreferencesRepository {
        fn with_owner(owner_id: &str, preferences: NotificationPreferences) -> Self {
            let repo = MockPreferencesRepository::default();
            repo.stored
                .lock()
                .unwrap()
                .insert(owner_id.to_string(), preferences);
            repo
        }
    }

    impl NotificationPreferencesRepositoryTrait for MockPreferencesRepository {
        fn find_preferences(&self, owner_id: &str) -> Result<Option<NotificationPreferences>> {
            Ok(self.stored.lock().unwrap().get(owner_id).copied())
        }

        fn save_preferences(
            &self,
            owner_id: &str,
            preferences: &NotificationPreferences,
        ) -> Result<()> {
            self.stored
                .lock()
                .unwrap()
                .insert(owner_id.to_string(), *preferences);
            Ok(())
        }

        fn list_owner_preferences(&self) -> Result<Vec<OwnerPreferences>> {
            unimplemented!()
        }
    }

    fn quiet() -> NotificationPreferences {
        NotificationPreferences {
            email_notifications: false,
            browser_notifications: false,
            renewal_reminders: false,
            weekly_summary: true,
            ..Default::default()
        }
    }

    fn parse_update(json: &str) -> PreferencesUpdate {
        serde_json::from_str(json).unwrap()
    }

    // ==================== Defaults and eligibility ====================

    #[test]
    fn test_default_preferences() {
        let prefs = NotificationPreferences::default();
        assert!(prefs.email_notifications);
        assert!(prefs.browser_notifications);
        assert!(prefs.renewal_reminders);
        assert!(!prefs.weekly_summary);
        assert_eq!(prefs.reminder_days, 2);
    }

    #[test]
    fn test_eligibility_requires_email() {
        let prefs = NotificationPreferences::default();
        assert!(prefs.wants_renewal_reminders());
        assert!(!prefs.wants_weekly_summary());

        let muted = NotificationPreferences {
            email_notifications: false,
            weekly_summary: true,
            ..Default::default()
        };
        assert!(!muted.wants_renewal_reminders());
        assert!(!muted.wants_weekly_summary());
    }

    #[test]
    fn test_preferences_serialize_camel_case() {
        let json = serde_json::to_value(NotificationPreferences::default()).unwrap();
        assert_eq!(json["emailNotifications"], true);
        assert_eq!(json["weeklySummary"], false);
        assert_eq!(json["reminderDays"], 2);
    }

    // ==================== Lenient update parsing ====================

    #[test]
    fn test_update_accepts_bools_and_strings() {
        let prefs = parse_update(
            r#"{"emailNotifications":"TRUE","browserNotifications":"yes",
                "renewalReminders":false,"weeklySummary":"true"}"#,
        )
        .resolve();
        assert!(prefs.email_notifications);
        assert!(!prefs.browser_notifications);
        assert!(!prefs.renewal_reminders);
        assert!(prefs.weekly_summary);
    }

    #[test]
    fn test_update_missing_and_odd_values_reset_to_defaults() {
        let prefs = parse_update(
            r#"{"emailNotifications":0,"browserNotifications":null,"weeklySummary":[true]}"#,
        )
        .resolve();
        assert_eq!(prefs, NotificationPreferences::default());
    }

    // ==================== Service ====================

    #[test]
    fn test_get_preferences_unknown_owner_gets_defaults() {
        let service = NotificationService::new(Arc::new(MockPreferencesRepository::default()));
        let prefs = service.get_preferences("nobody").unwrap();
        assert_eq!(prefs, NotificationPreferences::default());
    }

    #[test]
    fn test_get_preferences_returns_stored() {
        let repo = MockPreferencesRepository::with_owner("user-1", quiet());
        let service = NotificationService::new(Arc::new(repo));
        assert_eq!(service.get_preferences("user-1").unwrap(), quiet());
    }

    #[test]
    fn test_update_replaces_every_switch() {
        let repo = Arc::new(MockPreferencesRepository::with_owner("user-1", quiet()));
        let service = NotificationService::new(repo.clone());

        let saved = service
            .update_preferences("user-1", &parse_update(r#"{"browserNotifications":false}"#))
            .unwrap();

        assert!(saved.email_notifications);
        assert!(!saved.browser_notifications);
        assert!(saved.renewal_reminders);
        assert!(!saved.weekly_summary);
        assert_eq!(repo.find_preferences("user-1").unwrap(), Some(saved));
    }

    #[test]
    fn test_update_unknown_owner_is_not_found() {
        let repo = Arc::new(MockPreferencesRepository::default());
        let service = NotificationService::new(repo.clone());

        let result = service.update_preferences("ghost", &PreferencesUpdate::default());

        assert!(matches!(result, Err(Error::NotFound(_))));
        assert!(repo.stored.lock().unwrap().is_empty());
    }
}
