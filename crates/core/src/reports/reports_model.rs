//! Report domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Report body kinds with a dedicated assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    #[default]
    Summary,
    Category,
    Annual,
}

impl ReportKind {
    /// Parses a report `type` string. Returns `None` for types without a
    /// dedicated assembler; those are rendered as a summary.
    pub fn parse(report_type: &str) -> Option<Self> {
        match report_type.trim().to_ascii_lowercase().as_str() {
            "summary" => Some(ReportKind::Summary),
            "category" => Some(ReportKind::Category),
            "annual" => Some(ReportKind::Annual),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Summary => "summary",
            ReportKind::Category => "category",
            ReportKind::Annual => "annual",
        }
    }
}

/// Filters applied to the owner's full collection before a report is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilters {
    /// Case-insensitive category inclusion list; empty keeps everything.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Lower bound on start date. Subscriptions without a start date pass.
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    /// Upper bound on start date. Subscriptions without a start date pass.
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    /// Case-insensitive status match; a missing status reads as "active".
    #[serde(default)]
    pub status: Option<String>,
}

/// Request to generate a report.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub report_type: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(flatten)]
    pub filters: ReportFilters,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineMetrics {
    pub total_subscriptions: usize,
    pub total_monthly_spend: Decimal,
    pub average_per_subscription: Decimal,
    pub cost_per_day: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyCost {
    pub cost_per_day: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingRenewal {
    pub id: String,
    pub name: String,
    pub next_renewal_date: DateTime<Utc>,
    pub amount: Decimal,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    pub headline_metrics: HeadlineMetrics,
    pub daily_cost: DailyCost,
    pub top_insights: Vec<String>,
    pub upcoming_renewals: Vec<UpcomingRenewal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAmount {
    pub category: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VendorEntry {
    pub name: String,
    pub category: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryReport {
    /// Sorted by descending amount.
    pub category_totals: Vec<CategoryAmount>,
    pub top_vendors: Vec<VendorEntry>,
    pub optimization_suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// Upper-case English month name, e.g. "MARCH".
    pub month: String,
    pub year: i32,
    pub projected_spend: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnnualReport {
    pub monthly_spend: Decimal,
    pub annual_projection: Decimal,
    pub forecast: Vec<ForecastPoint>,
    pub renewal_watchlist: Vec<UpcomingRenewal>,
}

/// Structured body of a generated report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ReportContent {
    Summary(SummaryReport),
    Category(CategoryReport),
    Annual(AnnualReport),
}

/// A generated report ready for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedReport {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    /// The requested type string, kept verbatim.
    #[serde(rename = "type")]
    pub report_type: String,
    pub format: String,
    pub status: String,
    pub filters: ReportFilters,
    pub content: ReportContent,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportTemplate {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub report_type: String,
    pub description: String,
}
