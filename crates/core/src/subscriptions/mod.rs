//! Subscriptions module - domain models and the store trait.

mod billing_cycle;
mod subscriptions_model;
mod subscriptions_traits;


pub use billing_cycle::{monthly_equivalent, BillingCycle};
pub use subscriptions_model::{NewSubscription, Subscription};
pub use subscriptions_traits::SubscriptionRepositoryTrait;
