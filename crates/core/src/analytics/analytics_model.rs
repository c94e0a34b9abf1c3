//! Analytics view models.
//!
//! Derived on read and never persisted. Money figures are rounded to two
//! decimal places.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate counts and spend figures for a subscription collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_subscriptions: usize,
    pub active_subscriptions: usize,
    pub monthly_spend: Decimal,
    pub annual_projection: Decimal,
    pub cost_per_day: Decimal,
    /// Renewals in the next 30 days, counted over the owner's full collection.
    pub upcoming_renewals: usize,
    pub category_count: usize,
}

/// One calendar-month bucket of the spending trend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Short English month name, e.g. "Jan".
    pub month: String,
    pub year: i32,
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub name: String,
    pub value: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CycleCount {
    pub name: String,
    pub value: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopSubscription {
    pub name: String,
    pub amount: Decimal,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionTrend {
    Increasing,
    Flat,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Projections {
    pub annual_projection: Decimal,
    pub monthly_projection: Decimal,
    pub trend: ProjectionTrend,
}

/// Compact side-by-side view of one subscription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub billing_cycle: Option<String>,
    pub category: Option<String>,
}
