//! Analytics service trait.

use super::ai_context::{AiReportRequest, AnalyticsContext};
use super::analytics_model::{
    CategoryTotal, ComparisonRow, CycleCount, Overview, Projections, TopSubscription, TrendPoint,
};
use crate::errors::Result;
use crate::subscriptions::Subscription;

/// Trait defining the contract for analytics operations.
///
/// Each call reads one owner's subscriptions from the store and evaluates
/// against the current time. `date_range` takes a range key such as
/// "3months"; `None` means the whole collection.
pub trait AnalyticsServiceTrait: Send + Sync {
    fn get_overview(&self, owner_id: &str, date_range: Option<&str>) -> Result<Overview>;

    fn get_spending_trend(&self, owner_id: &str, date_range: Option<&str>)
        -> Result<Vec<TrendPoint>>;

    fn get_category_breakdown(
        &self,
        owner_id: &str,
        date_range: Option<&str>,
    ) -> Result<Vec<CategoryTotal>>;

    fn get_billing_cycle_analysis(
        &self,
        owner_id: &str,
        date_range: Option<&str>,
    ) -> Result<Vec<CycleCount>>;

    fn get_top_subscriptions(
        &self,
        owner_id: &str,
        date_range: Option<&str>,
    ) -> Result<Vec<TopSubscription>>;

    fn get_projections(&self, owner_id: &str) -> Result<Projections>;

    fn get_insights(&self, owner_id: &str) -> Result<Vec<String>>;

    /// Subscriptions renewing within `days` days, soonest first.
    fn get_upcoming_renewals(&self, owner_id: &str, days: i64) -> Result<Vec<Subscription>>;

    /// Comparison rows in the order of `subscription_ids`; unknown ids are skipped.
    fn compare_subscriptions(
        &self,
        owner_id: &str,
        subscription_ids: &[String],
    ) -> Result<Vec<ComparisonRow>>;

    fn build_ai_context(
        &self,
        owner_id: &str,
        request: &AiReportRequest,
    ) -> Result<AnalyticsContext>;
}
