//! Analytics context handed to the external AI report summarizer.
//!
//! The LLM call itself lives outside the core. This module validates the
//! request and gathers every aggregate view into one serializable bundle.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregation::{
    billing_cycle_mix, category_breakdown, get_overview, projections, sorted_by_amount_desc,
    spending_trend, top_subscriptions,
};
use super::analytics_model::{
    CategoryTotal, CycleCount, Overview, Projections, TopSubscription, TrendPoint,
};
use super::date_range::filter_by_range;
use super::insights::insights;
use crate::constants::{NOTABLE_SUBSCRIPTIONS_LIMIT, RENEWAL_WINDOW_DAYS};
use crate::errors::{Error, Result, ValidationError};
use crate::subscriptions::Subscription;
use crate::utils::decimal_utils::round_money;
use crate::utils::time_utils::is_within_days;

fn default_format() -> String {
    "pdf".to_string()
}

fn default_true() -> bool {
    true
}

/// Request for an AI-written report.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AiReportRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub report_type: Option<String>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_true")]
    pub include_charts: bool,
    #[serde(default = "default_true")]
    pub include_insights: bool,
    /// Range key for the aggregate views; "all" when absent.
    #[serde(default)]
    pub date_range: Option<String>,
}

impl AiReportRequest {
    pub fn validate(&self) -> Result<()> {
        if self.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self
            .report_type
            .as_deref()
            .map_or(true, |t| t.trim().is_empty())
        {
            return Err(Error::Validation(ValidationError::MissingField(
                "type".to_string(),
            )));
        }
        if self.start_date.is_none() {
            return Err(Error::Validation(ValidationError::MissingField(
                "startDate".to_string(),
            )));
        }
        if self.end_date.is_none() {
            return Err(Error::Validation(ValidationError::MissingField(
                "endDate".to_string(),
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportWindow {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportMeta {
    pub name: String,
    #[serde(rename = "type")]
    pub report_type: String,
    pub date_range: ReportWindow,
    pub categories: Vec<String>,
    pub format: String,
    pub include_charts: bool,
    pub include_insights: bool,
}

/// Flat view of a subscription for the AI context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSnapshot {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub amount: Decimal,
    pub currency: Option<String>,
    pub billing_cycle: Option<String>,
    pub status: Option<String>,
    pub next_renewal_date: Option<DateTime<Utc>>,
    pub start_date: Option<DateTime<Utc>>,
}

impl From<&Subscription> for SubscriptionSnapshot {
    fn from(sub: &Subscription) -> Self {
        SubscriptionSnapshot {
            id: sub.id.clone(),
            name: sub.name.clone(),
            category: sub.category.clone(),
            amount: round_money(sub.amount),
            currency: sub.currency.clone(),
            billing_cycle: sub.billing_cycle.clone(),
            status: sub.status.clone(),
            next_renewal_date: sub.next_renewal_date,
            start_date: sub.start_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsContext {
    pub report_meta: ReportMeta,
    pub overview: Overview,
    pub spending_trend: Vec<TrendPoint>,
    pub category_breakdown: Vec<CategoryTotal>,
    pub billing_cycle_mix: Vec<CycleCount>,
    pub top_subscriptions: Vec<TopSubscription>,
    pub projections: Projections,
    pub insights: Vec<String>,
    pub notable_subscriptions: Vec<SubscriptionSnapshot>,
    #[serde(rename = "upcomingRenewals30d")]
    pub upcoming_renewals_30d: Vec<SubscriptionSnapshot>,
    pub generated_at: DateTime<Utc>,
}

/// Validates `request` and gathers the analytics context over the owner's
/// full collection.
pub fn build_analytics_context(
    subscriptions: &[Subscription],
    request: &AiReportRequest,
    now: DateTime<Utc>,
) -> Result<AnalyticsContext> {
    request.validate()?;

    let range_key = Some(request.date_range.as_deref().unwrap_or("all"));
    let ranged = filter_by_range(subscriptions, range_key, now);

    let report_meta = ReportMeta {
        name: request.name.clone().unwrap_or_default(),
        report_type: request.report_type.clone().unwrap_or_default(),
        date_range: ReportWindow {
            start: request.start_date,
            end: request.end_date,
        },
        categories: request
            .categories
            .clone()
            .unwrap_or_else(|| vec!["All".to_string()]),
        format: request.format.clone(),
        include_charts: request.include_charts,
        include_insights: request.include_insights,
    };

    let notable_subscriptions = sorted_by_amount_desc(subscriptions)
        .into_iter()
        .take(NOTABLE_SUBSCRIPTIONS_LIMIT)
        .map(SubscriptionSnapshot::from)
        .collect();

    let mut upcoming: Vec<&Subscription> = subscriptions
        .iter()
        .filter(|sub| is_within_days(sub.next_renewal_date, now, RENEWAL_WINDOW_DAYS))
        .collect();
    upcoming.sort_by_key(|sub| sub.next_renewal_date);

    Ok(AnalyticsContext {
        report_meta,
        overview: get_overview(subscriptions, range_key, now),
        spending_trend: spending_trend(subscriptions, range_key, now),
        category_breakdown: category_breakdown(&ranged),
        billing_cycle_mix: billing_cycle_mix(&ranged),
        top_subscriptions: top_subscriptions(&ranged),
        projections: projections(subscriptions, now),
        insights: insights(subscriptions, now).collect(),
        notable_subscriptions,
        upcoming_renewals_30d: upcoming.into_iter().map(SubscriptionSnapshot::from).collect(),
        generated_at: now,
    })
}
