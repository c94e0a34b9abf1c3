//! Subscription domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::billing_cycle::BillingCycle;
use crate::constants::{
    CANCELLED_STATUS, DEFAULT_BILLING_CYCLE, DEFAULT_CURRENCY, DEFAULT_STATUS,
    MAX_SUBSCRIPTION_AMOUNT, UNCATEGORIZED,
};
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a tracked subscription.
///
/// Owned by exactly one user. The core only reads subscriptions; creation,
/// updates and deletion belong to the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub amount: Decimal,
    pub currency: Option<String>,
    pub category: Option<String>,
    pub billing_cycle: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub next_renewal_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub auto_renewal: bool,
    pub payment_method: Option<String>,
    pub portal_link: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Subscription {
    /// Category for aggregation; `None` reads as "Uncategorized".
    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }

    /// Billing cycle label for grouping; `None` reads as "monthly".
    pub fn billing_cycle_or_default(&self) -> &str {
        self.billing_cycle.as_deref().unwrap_or(DEFAULT_BILLING_CYCLE)
    }

    pub fn cycle(&self) -> BillingCycle {
        BillingCycle::parse(self.billing_cycle.as_deref())
    }

    /// Cost normalized to one month. Computed on read, never stored.
    pub fn monthly_amount(&self) -> Decimal {
        self.cycle().to_monthly(self.amount)
    }

    pub fn is_cancelled(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case(CANCELLED_STATUS))
    }

    pub fn currency_or_default(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    /// Status for filtering; `None` reads as "active".
    pub fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_STATUS)
    }
}

/// Input model for creating a new subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscription {
    pub name: String,
    pub amount: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub billing_cycle: Option<String>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_renewal_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub auto_renewal: Option<bool>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub portal_link: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewSubscription {
    /// Validates the new subscription data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Subscription name cannot be empty".to_string(),
            )));
        }
        if self.amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Subscription amount cannot be negative: {}",
                self.amount
            ))));
        }
        if self.amount > MAX_SUBSCRIPTION_AMOUNT {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Subscription amount exceeds {}: {}",
                MAX_SUBSCRIPTION_AMOUNT, self.amount
            ))));
        }
        if let Some(currency) = &self.currency {
            if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Currency must be a 3-letter code: '{}'",
                    currency
                ))));
            }
        }
        Ok(())
    }

    /// Builds the stored record, filling the same defaults the store applies.
    pub fn into_subscription(
        self,
        id: impl Into<String>,
        owner_id: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Subscription {
        Subscription {
            id: id.into(),
            owner_id: owner_id.into(),
            name: self.name,
            amount: self.amount,
            currency: Some(
                self.currency
                    .map(|c| c.to_ascii_uppercase())
                    .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            ),
            category: self.category,
            billing_cycle: Some(
                self.billing_cycle
                    .unwrap_or_else(|| DEFAULT_BILLING_CYCLE.to_string()),
            ),
            start_date: self.start_date,
            next_renewal_date: self.next_renewal_date,
            end_date: self.end_date,
            status: Some(self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string())),
            auto_renewal: self.auto_renewal.unwrap_or(true),
            payment_method: self.payment_method,
            portal_link: self.portal_link,
            notes: self.notes,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}
