//! Analytics module - range filtering, aggregation, insights and comparison.
//!
//! Every function here is a pure transformation of a subscription slice.
//! `AnalyticsService` wraps them with store access for one owner.

mod aggregation;
mod ai_context;
mod analytics_model;
mod analytics_service;
mod analytics_traits;
mod comparison;
mod date_range;
mod insights;


#[cfg(test)]
mod analytics_service_tests;

pub use aggregation::{
    billing_cycle_mix, category_breakdown, count_upcoming_renewals, get_overview, projections,
    spending_trend, top_subscriptions,
};
pub use ai_context::{
    build_analytics_context, AiReportRequest, AnalyticsContext, ReportMeta, ReportWindow,
    SubscriptionSnapshot,
};
pub use analytics_model::{
    CategoryTotal, ComparisonRow, CycleCount, Overview, ProjectionTrend, Projections,
    TopSubscription, TrendPoint,
};
pub use analytics_service::AnalyticsService;
pub use analytics_traits::AnalyticsServiceTrait;
pub use comparison::compare;
pub use date_range::{filter_by_range, DateRange};
pub use insights::{insights, Insights};
pub(crate) use aggregation::sorted_by_amount_desc;
