use log::debug;
use std::sync::Arc;

use super::notifications_model::{NotificationPreferences, PreferencesUpdate};
use super::notifications_traits::{NotificationPreferencesRepositoryTrait, NotificationServiceTrait};
use crate::errors::{Error, Result};

/// Service reading and replacing owner notification preferences.
pub struct NotificationService {
    repository: Arc<dyn NotificationPreferencesRepositoryTrait>,
}

impl NotificationService {
    pub fn new(repository: Arc<dyn NotificationPreferencesRepositoryTrait>) -> Self {
        NotificationService { repository }
    }
}

impl NotificationServiceTrait for NotificationService {
    fn get_preferences(&self, owner_id: &str) -> Result<NotificationPreferences> {
        let stored = self.repository.find_preferences(owner_id)?;
        if stored.is_none() {
            debug!("No preferences stored for owner {}, using defaults", owner_id);
        }
        Ok(stored.unwrap_or_default())
    }

    fn update_preferences(
        &self,
        owner_id: &str,
        update: &PreferencesUpdate,
    ) -> Result<NotificationPreferences> {
        if self.repository.find_preferences(owner_id)?.is_none() {
            return Err(Error::NotFound(format!("Owner {}", owner_id)));
        }
        let preferences = update.resolve();
        debug!("Updating preferences for owner {}: {:?}", owner_id, preferences);
        self.repository.save_preferences(owner_id, &preferences)?;
        Ok(preferences)
    }
}
