//! Subscription store trait.
//!
//! The store is an external collaborator. This trait defines the read
//! contract the analytics and report services need, without any
//! database-specific types.

use super::subscriptions_model::Subscription;
use crate::errors::Result;

/// Trait defining the read contract of the subscription store.
///
/// Every call is scoped to one owner; implementations must never return
/// another owner's records.
pub trait SubscriptionRepositoryTrait: Send + Sync {
    /// Lists an owner's subscriptions.
    ///
    /// # Arguments
    /// * `category_filter` - If Some, keep categories containing this text (case-insensitive)
    /// * `search_filter` - If Some, keep names containing this text (case-insensitive)
    fn list_for_owner(
        &self,
        owner_id: &str,
        category_filter: Option<&str>,
        search_filter: Option<&str>,
    ) -> Result<Vec<Subscription>>;

    /// Lists subscriptions renewing within the next `days` days, soonest first.
    fn list_upcoming(&self, owner_id: &str, days: i64) -> Result<Vec<Subscription>>;

    /// Retrieves one subscription, or `None` when the owner has no such id.
    fn find_by_id(&self, owner_id: &str, id: &str) -> Result<Option<Subscription>>;
}
