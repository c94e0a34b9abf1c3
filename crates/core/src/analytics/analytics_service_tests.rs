//! Unit tests for the analytics service.

#[cfg(test)]
mod tests {
    use crate::analytics::*;
    use crate::errors::{Error, Result};
    use crate::subscriptions::{Subscription, SubscriptionRepositoryTrait};
    use chrono::{DateTime, Duration, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    // ============================================================================
    // Mock Implementations
    // ============================================================================

    struct MockSubscriptionRepository {
        subscriptions: Vec<Subscription>,
    }

    impl MockSubscriptionRepository {
        fn new(subscriptions: Vec<Subscription>) -> Self {
            Self { subscriptions }
        }
    }

    impl SubscriptionRepositoryTrait for MockSubscriptionRepository {
        fn list_for_owner(
            &self,
            owner_id: &str,
            _category_filter: Option<&str>,
            _search_filter: Option<&str>,
        ) -> Result<Vec<Subscription>> {
            Ok(self
                .subscriptions
                .iter()
                .filter(|s| s.owner_id == owner_id)
                .cloned()
                .collect())
        }

        fn list_upcoming(&self, owner_id: &str, days: i64) -> Result<Vec<Subscription>> {
            let now = Utc::now();
            let mut upcoming: Vec<Subscription> = self
                .subscriptions
                .iter()
                .filter(|s| s.owner_id == owner_id)
                .filter(|s| {
                    s.next_renewal_date
                        .is_some_and(|d| d >= now && d <= now + Duration::days(days))
                })
                .cloned()
                .collect();
            upcoming.sort_by_key(|s| s.next_renewal_date);
            Ok(upcoming)
        }

        fn find_by_id(&self, owner_id: &str, id: &str) -> Result<Option<Subscription>> {
            Ok(self
                .subscriptions
                .iter()
                .find(|s| s.owner_id == owner_id && s.id == id)
                .cloned())
        }
    }

    struct FailingRepository;

    impl SubscriptionRepositoryTrait for FailingRepository {
        fn list_for_owner(
            &self,
            _owner_id: &str,
            _category_filter: Option<&str>,
            _search_filter: Option<&str>,
        ) -> Result<Vec<Subscription>> {
            Err(Error::Repository("store unreachable".to_string()))
        }

        fn list_upcoming(&self, _owner_id: &str, _days: i64) -> Result<Vec<Subscription>> {
            Err(Error::Repository("store unreachable".to_string()))
        }

        fn find_by_id(&self, _owner_id: &str, _id: &str) -> Result<Option<Subscription>> {
            Err(Error::Repository("store unreachable".to_string()))
        }
    }

    // ============================================================================
    // Fixtures
    // ============================================================================

    fn create_subscription(
        id: &str,
        owner_id: &str,
        amount: Decimal,
        cycle: &str,
        started_days_ago: i64,
    ) -> Subscription {
        Subscription {
            id: id.to_string(),
            owner_id: owner_id.to_string(),
            name: format!("Subscription {}", id),
            amount,
            currency: Some("USD".to_string()),
            billing_cycle: Some(cycle.to_string()),
            status: Some("active".to_string()),
            start_date: Some(Utc::now() - Duration::days(started_days_ago)),
            ..Default::default()
        }
    }

    fn renewing_in(mut sub: Subscription, days: i64) -> Subscription {
        sub.next_renewal_date = Some(Utc::now() + Duration::days(days));
        sub
    }

    fn create_service(subscriptions: Vec<Subscription>) -> AnalyticsService {
        AnalyticsService::new(Arc::new(MockSubscriptionRepository::new(subscriptions)))
    }

    fn far_future() -> DateTime<Utc> {
        Utc::now() + Duration::days(365)
    }

    // ============================================================================
    // Tests
    // ============================================================================

    #[test]
    fn test_overview_is_scoped_to_owner() {
        let service = create_service(vec![
            create_subscription("a", "user-1", dec!(12), "yearly", 5),
            create_subscription("b", "user-1", dec!(10), "monthly", 5),
            create_subscription("c", "user-2", dec!(99), "monthly", 5),
        ]);

        let overview = service.get_overview("user-1", None).unwrap();
        assert_eq!(overview.total_subscriptions, 2);
        assert_eq!(overview.monthly_spend, dec!(11));
        assert_eq!(overview.annual_projection, dec!(132));
    }

    #[test]
    fn test_overview_range_filter_applies() {
        let service = create_service(vec![
            create_subscription("recent", "user-1", dec!(10), "monthly", 5),
            create_subscription("old", "user-1", dec!(10), "monthly", 200),
        ]);

        let three_months = service.get_overview("user-1", Some("3months")).unwrap();
        assert_eq!(three_months.total_subscriptions, 1);

        let all = service.get_overview("user-1", Some("all")).unwrap();
        assert_eq!(all.total_subscriptions, 2);
    }

    #[test]
    fn test_category_and_top_respect_range() {
        let mut video = create_subscription("a", "user-1", dec!(15), "monthly", 5);
        video.category = Some("Video".to_string());
        let mut old = create_subscription("b", "user-1", dec!(100), "monthly", 500);
        old.category = Some("Software".to_string());
        let service = create_service(vec![video, old]);

        let categories = service.get_category_breakdown("user-1", Some("1year")).unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Video");

        let top = service.get_top_subscriptions("user-1", None).unwrap();
        assert_eq!(top[0].name, "Subscription b");

        let cycles = service.get_billing_cycle_analysis("user-1", None).unwrap();
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].value, 2);
    }

    #[test]
    fn test_spending_trend_has_default_window() {
        let subs = vec![create_subscription("a", "user-1", dec!(8), "monthly", 0)];
        let service = create_service(subs);
        let trend = service.get_spending_trend("user-1", None).unwrap();
        assert_eq!(trend.len(), 6);
        assert_eq!(trend[5].total, dec!(8));
    }

    #[test]
    fn test_insights_for_empty_owner() {
        let service = create_service(vec![]);
        let insights = service.get_insights("nobody").unwrap();
        assert_eq!(insights, vec!["Add your first subscription to unlock analytics."]);
    }

    #[test]
    fn test_insights_include_week_renewals() {
        let service = create_service(vec![
            renewing_in(create_subscription("a", "user-1", dec!(10), "monthly", 5), 2),
            renewing_in(create_subscription("b", "user-1", dec!(30), "monthly", 5), 20),
        ]);
        let insights = service.get_insights("user-1").unwrap();
        assert_eq!(
            insights,
            vec![
                "You currently manage 2 subscriptions.",
                "Average subscription cost is 20",
                "1 renewals due in the next week.",
            ]
        );
    }

    #[test]
    fn test_projections_from_full_collection() {
        let service = create_service(vec![
            create_subscription("a", "user-1", dec!(30), "quarterly", 900),
            create_subscription("b", "user-1", dec!(5), "weekly", 1),
        ]);
        let projections = service.get_projections("user-1").unwrap();
        assert_eq!(projections.annual_projection, dec!(360));
        assert_eq!(projections.monthly_projection, dec!(30));
    }

    #[test]
    fn test_compare_preserves_order_and_skips_missing() {
        let service = create_service(vec![
            create_subscription("a", "user-1", dec!(10), "monthly", 5),
            create_subscription("b", "user-1", dec!(20), "yearly", 5),
            create_subscription("x", "user-2", dec!(30), "monthly", 5),
        ]);
        let ids = vec![
            "b".to_string(),
            "missing".to_string(),
            "x".to_string(),
            "a".to_string(),
        ];

        let rows = service.compare_subscriptions("user-1", &ids).unwrap();
        let row_ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(row_ids, vec!["b", "a"]);
        assert_eq!(rows[0].billing_cycle.as_deref(), Some("yearly"));
    }

    #[test]
    fn test_upcoming_renewals_delegate_to_store() {
        let mut later = create_subscription("later", "user-1", dec!(1), "monthly", 5);
        later.next_renewal_date = Some(far_future());
        let service = create_service(vec![
            renewing_in(create_subscription("soon", "user-1", dec!(1), "monthly", 5), 3),
            later,
            renewing_in(create_subscription("sooner", "user-1", dec!(1), "monthly", 5), 1),
        ]);

        let upcoming = service.get_upcoming_renewals("user-1", 30).unwrap();
        let ids: Vec<&str> = upcoming.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["sooner", "soon"]);
    }

    #[test]
    fn test_ai_context_requires_dates() {
        let service = create_service(vec![]);
        let request = AiReportRequest {
            name: Some("Q2 review".to_string()),
            report_type: Some("ai_summary".to_string()),
            ..Default::default()
        };
        let result = service.build_ai_context("user-1", &request);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_ai_context_collects_views() {
        let mut subscriptions: Vec<Subscription> = (0..20)
            .map(|i| {
                create_subscription(
                    &format!("s{}", i),
                    "user-1",
                    Decimal::from(i + 1),
                    "monthly",
                    10,
                )
            })
            .collect();
        subscriptions[0].next_renewal_date = Some(Utc::now() + Duration::days(10));
        let service = create_service(subscriptions);

        let request = AiReportRequest {
            name: Some("Annual review".to_string()),
            report_type: Some("ai_summary".to_string()),
            start_date: Some(Utc::now() - Duration::days(90)),
            end_date: Some(Utc::now()),
            format: "pdf".to_string(),
            include_charts: true,
            include_insights: true,
            ..Default::default()
        };
        let context = service.build_ai_context("user-1", &request).unwrap();

        assert_eq!(context.report_meta.categories, vec!["All".to_string()]);
        assert_eq!(context.overview.total_subscriptions, 20);
        assert_eq!(context.overview.upcoming_renewals, 1);
        assert_eq!(context.notable_subscriptions.len(), 15);
        assert_eq!(context.notable_subscriptions[0].id, "s19");
        assert_eq!(context.top_subscriptions.len(), 5);
        assert_eq!(context.upcoming_renewals_30d.len(), 1);
        assert_eq!(context.spending_trend.len(), 12);

        let json = serde_json::to_value(&context).unwrap();
        assert!(json.get("upcomingRenewals30d").is_some());
        assert_eq!(json["reportMeta"]["type"], "ai_summary");
    }

    #[test]
    fn test_store_failure_propagates() {
        let service = AnalyticsService::new(Arc::new(FailingRepository));
        assert!(matches!(
            service.get_overview("user-1", None),
            Err(Error::Repository(_))
        ));
        assert!(service.compare_subscriptions("user-1", &["a".to_string()]).is_err());
    }
}
