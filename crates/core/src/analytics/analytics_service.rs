use chrono::Utc;
use log::{debug, warn};
use std::sync::Arc;

use super::aggregation::{
    billing_cycle_mix, category_breakdown, get_overview, projections, spending_trend,
    top_subscriptions,
};
use super::ai_context::{build_analytics_context, AiReportRequest, AnalyticsContext};
use super::analytics_model::{
    CategoryTotal, ComparisonRow, CycleCount, Overview, Projections, TopSubscription, TrendPoint,
};
use super::analytics_traits::AnalyticsServiceTrait;
use super::date_range::filter_by_range;
use super::insights::insights;
use crate::errors::Result;
use crate::subscriptions::{Subscription, SubscriptionRepositoryTrait};

/// Service computing analytics views for one owner at a time.
pub struct AnalyticsService {
    repository: Arc<dyn SubscriptionRepositoryTrait>,
}

impl AnalyticsService {
    pub fn new(repository: Arc<dyn SubscriptionRepositoryTrait>) -> Self {
        AnalyticsService { repository }
    }

    fn load_all(&self, owner_id: &str) -> Result<Vec<Subscription>> {
        let subscriptions = self.repository.list_for_owner(owner_id, None, None)?;
        debug!(
            "Loaded {} subscriptions for owner {}",
            subscriptions.len(),
            owner_id
        );
        Ok(subscriptions)
    }

    fn load_in_range(&self, owner_id: &str, date_range: Option<&str>) -> Result<Vec<Subscription>> {
        let all = self.load_all(owner_id)?;
        Ok(filter_by_range(&all, date_range, Utc::now()))
    }
}

impl AnalyticsServiceTrait for AnalyticsService {
    fn get_overview(&self, owner_id: &str, date_range: Option<&str>) -> Result<Overview> {
        debug!("Computing overview for owner {} ({:?})", owner_id, date_range);
        let all = self.load_all(owner_id)?;
        Ok(get_overview(&all, date_range, Utc::now()))
    }

    fn get_spending_trend(
        &self,
        owner_id: &str,
        date_range: Option<&str>,
    ) -> Result<Vec<TrendPoint>> {
        debug!("Computing spending trend for owner {} ({:?})", owner_id, date_range);
        let all = self.load_all(owner_id)?;
        Ok(spending_trend(&all, date_range, Utc::now()))
    }

    fn get_category_breakdown(
        &self,
        owner_id: &str,
        date_range: Option<&str>,
    ) -> Result<Vec<CategoryTotal>> {
        let subscriptions = self.load_in_range(owner_id, date_range)?;
        Ok(category_breakdown(&subscriptions))
    }

    fn get_billing_cycle_analysis(
        &self,
        owner_id: &str,
        date_range: Option<&str>,
    ) -> Result<Vec<CycleCount>> {
        let subscriptions = self.load_in_range(owner_id, date_range)?;
        Ok(billing_cycle_mix(&subscriptions))
    }

    fn get_top_subscriptions(
        &self,
        owner_id: &str,
        date_range: Option<&str>,
    ) -> Result<Vec<TopSubscription>> {
        let subscriptions = self.load_in_range(owner_id, date_range)?;
        Ok(top_subscriptions(&subscriptions))
    }

    fn get_projections(&self, owner_id: &str) -> Result<Projections> {
        let all = self.load_all(owner_id)?;
        Ok(projections(&all, Utc::now()))
    }

    fn get_insights(&self, owner_id: &str) -> Result<Vec<String>> {
        let all = self.load_all(owner_id)?;
        Ok(insights(&all, Utc::now()).collect())
    }

    fn get_upcoming_renewals(&self, owner_id: &str, days: i64) -> Result<Vec<Subscription>> {
        self.repository.list_upcoming(owner_id, days)
    }

    fn compare_subscriptions(
        &self,
        owner_id: &str,
        subscription_ids: &[String],
    ) -> Result<Vec<ComparisonRow>> {
        let mut rows = Vec::with_capacity(subscription_ids.len());
        for id in subscription_ids {
            match self.repository.find_by_id(owner_id, id)? {
                Some(sub) => rows.push(ComparisonRow::from(&sub)),
                None => warn!(
                    "Skipping unknown subscription {} in comparison for owner {}",
                    id, owner_id
                ),
            }
        }
        Ok(rows)
    }

    fn build_ai_context(
        &self,
        owner_id: &str,
        request: &AiReportRequest,
    ) -> Result<AnalyticsContext> {
        request.validate()?;
        debug!("Building AI analytics context for owner {}", owner_id);
        let all = self.load_all(owner_id)?;
        build_analytics_context(&all, request, Utc::now())
    }
}
