use chrono::{DateTime, Utc};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;

use super::reports_model::{
    AnnualReport, CategoryAmount, CategoryReport, DailyCost, ForecastPoint, HeadlineMetrics,
    ReportContent, ReportFilters, ReportKind, SummaryReport, UpcomingRenewal, VendorEntry,
};
use crate::analytics::{category_breakdown, count_upcoming_renewals, sorted_by_amount_desc};
use crate::constants::{
    CATEGORY_SUGGESTIONS_LIMIT, DAYS_PER_MONTH, DEFAULT_CURRENCY, FORECAST_MONTHS,
    FORECAST_SEASONAL_AMPLITUDE, RENEWAL_WINDOW_DAYS, TOP_SUBSCRIPTIONS_LIMIT,
};
use crate::subscriptions::Subscription;
use crate::utils::decimal_utils::{display_money, round_money, safe_div, scale_money, sum_money};
use crate::utils::time_utils::{is_within_days, YearMonth};

const FALLBACK_INSIGHT: &str = "Add more subscriptions to unlock analytics-driven insights.";

/// Narrows the owner's full collection with the report filters.
pub fn apply_filters(subscriptions: &[Subscription], filters: &ReportFilters) -> Vec<Subscription> {
    let status = filters
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    subscriptions
        .iter()
        .filter(|sub| {
            filters.categories.is_empty()
                || filters.categories.iter().any(|c| {
                    c.eq_ignore_ascii_case(sub.category.as_deref().unwrap_or(""))
                })
        })
        .filter(|sub| match (filters.start_date, sub.start_date) {
            (Some(start), Some(started)) => started >= start,
            _ => true,
        })
        .filter(|sub| match (filters.end_date, sub.start_date) {
            (Some(end), Some(started)) => started <= end,
            _ => true,
        })
        .filter(|sub| {
            status.map_or(true, |wanted| wanted.eq_ignore_ascii_case(sub.status_or_default()))
        })
        .cloned()
        .collect()
}

fn monthly_spend(subscriptions: &[Subscription]) -> Decimal {
    sum_money(subscriptions.iter().map(Subscription::monthly_amount))
}

fn category_totals(subscriptions: &[Subscription]) -> Vec<CategoryAmount> {
    let mut totals: Vec<CategoryAmount> = category_breakdown(subscriptions)
        .into_iter()
        .map(|total| CategoryAmount {
            category: total.name,
            amount: total.value,
        })
        .collect();
    totals.sort_by(|a, b| b.amount.cmp(&a.amount));
    totals
}

/// Renewals due within the next 30 days, earliest first.
fn upcoming_renewals(subscriptions: &[Subscription], now: DateTime<Utc>) -> Vec<UpcomingRenewal> {
    let mut upcoming: Vec<UpcomingRenewal> = subscriptions
        .iter()
        .filter_map(|sub| {
            let renewal = sub.next_renewal_date?;
            is_within_days(Some(renewal), now, RENEWAL_WINDOW_DAYS).then(|| UpcomingRenewal {
                id: sub.id.clone(),
                name: sub.name.clone(),
                next_renewal_date: renewal,
                amount: round_money(sub.amount),
                status: sub.status.clone(),
            })
        })
        .collect();
    upcoming.sort_by_key(|renewal| renewal.next_renewal_date);
    upcoming
}

fn headline_metrics(subscriptions: &[Subscription]) -> HeadlineMetrics {
    let total = monthly_spend(subscriptions);
    HeadlineMetrics {
        total_subscriptions: subscriptions.len(),
        total_monthly_spend: round_money(total),
        average_per_subscription: round_money(safe_div(total, Decimal::from(subscriptions.len()))),
        cost_per_day: round_money(total / Decimal::from(DAYS_PER_MONTH)),
        currency: subscriptions
            .iter()
            .find_map(|sub| sub.currency.clone())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
    }
}

fn summary_insights(
    metrics: &HeadlineMetrics,
    renewals_due: usize,
    totals: &[CategoryAmount],
) -> Vec<String> {
    let mut insights = Vec::new();

    if metrics.total_subscriptions > 0 {
        insights.push(format!(
            "You currently manage {} subscriptions.",
            metrics.total_subscriptions
        ));
    }
    if metrics.total_monthly_spend > Decimal::ZERO {
        insights.push(format!(
            "Estimated monthly spend: {}",
            display_money(metrics.total_monthly_spend)
        ));
    }
    if renewals_due > 0 {
        insights.push(format!(
            "{} renewals are due soon. Review them to avoid unexpected charges.",
            renewals_due
        ));
    }
    if let Some(heaviest) = totals.first() {
        insights.push(format!(
            "Highest spend category: {} ({}). Consider optimization opportunities.",
            heaviest.category,
            display_money(heaviest.amount)
        ));
    }

    if insights.is_empty() {
        insights.push(FALLBACK_INSIGHT.to_string());
    }
    insights
}

/// Monthly summary over `filtered`.
///
/// The renewal sentence counts renewals across `all`, the owner's
/// unfiltered collection.
pub fn build_summary_report(
    filtered: &[Subscription],
    all: &[Subscription],
    now: DateTime<Utc>,
) -> SummaryReport {
    let headline_metrics = headline_metrics(filtered);
    let renewals_due = count_upcoming_renewals(all, RENEWAL_WINDOW_DAYS, now);
    let totals = category_totals(filtered);
    let top_insights = summary_insights(&headline_metrics, renewals_due, &totals);

    SummaryReport {
        daily_cost: DailyCost {
            cost_per_day: headline_metrics.cost_per_day,
            currency: headline_metrics.currency.clone(),
        },
        headline_metrics,
        top_insights,
        upcoming_renewals: upcoming_renewals(filtered, now),
    }
}

pub fn build_category_report(filtered: &[Subscription]) -> CategoryReport {
    let category_totals = category_totals(filtered);

    let top_vendors = sorted_by_amount_desc(filtered)
        .into_iter()
        .take(TOP_SUBSCRIPTIONS_LIMIT)
        .map(|sub| VendorEntry {
            name: sub.name.clone(),
            category: sub.category_or_default().to_string(),
            amount: round_money(sub.amount),
        })
        .collect();

    let optimization_suggestions = category_totals
        .iter()
        .take(CATEGORY_SUGGESTIONS_LIMIT)
        .map(|total| {
            format!(
                "Review {} spend of {}",
                total.category,
                display_money(total.amount)
            )
        })
        .collect();

    CategoryReport {
        category_totals,
        top_vendors,
        optimization_suggestions,
    }
}

/// Seasonal multiplier for forecast month `index`.
fn seasonal_factor(index: u32) -> Decimal {
    let factor = 1.0 + (f64::from(index) / 2.0).sin() * FORECAST_SEASONAL_AMPLITUDE;
    Decimal::from_f64(factor).unwrap_or(Decimal::ONE)
}

/// Annual projection with a twelve month forecast starting at the month of `now`.
pub fn build_annual_report(filtered: &[Subscription], now: DateTime<Utc>) -> AnnualReport {
    let monthly = monthly_spend(filtered);
    let current = YearMonth::from_date(now.date_naive());

    let forecast = (0..FORECAST_MONTHS)
        .map(|i| {
            let period = current.plus_months(i);
            ForecastPoint {
                month: period.month_name().to_uppercase(),
                year: period.year,
                projected_spend: round_money(scale_money(monthly, seasonal_factor(i))),
            }
        })
        .collect();

    AnnualReport {
        monthly_spend: round_money(monthly),
        annual_projection: round_money(scale_money(monthly, Decimal::from(12))),
        forecast,
        renewal_watchlist: upcoming_renewals(filtered, now),
    }
}

/// Filters `all` and builds the report body for `kind`.
pub fn assemble_report(
    all: &[Subscription],
    kind: ReportKind,
    filters: &ReportFilters,
    now: DateTime<Utc>,
) -> ReportContent {
    let filtered = apply_filters(all, filters);
    match kind {
        ReportKind::Summary => ReportContent::Summary(build_summary_report(&filtered, all, now)),
        ReportKind::Category => ReportContent::Category(build_category_report(&filtered)),
        ReportKind::Annual => ReportContent::Annual(build_annual_report(&filtered, now)),
    }
}
