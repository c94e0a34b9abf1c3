use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::analytics_model::{
    CategoryTotal, CycleCount, Overview, ProjectionTrend, Projections, TopSubscription, TrendPoint,
};
use super::date_range::{filter_by_range, DateRange};
use crate::constants::{
    DAYS_PER_MONTH, DEFAULT_TREND_MONTHS, MIN_ALL_TREND_MONTHS, RENEWAL_WINDOW_DAYS,
    TOP_SUBSCRIPTIONS_LIMIT,
};
use crate::subscriptions::Subscription;
use crate::utils::decimal_utils::{add_money, round_money, scale_money, sum_money};
use crate::utils::time_utils::{is_within_days, minus_months, whole_months_between, YearMonth};

/// Counts subscriptions whose next renewal lies within `days` days of `now`.
pub fn count_upcoming_renewals(
    subscriptions: &[Subscription],
    days: i64,
    now: DateTime<Utc>,
) -> usize {
    subscriptions
        .iter()
        .filter(|sub| is_within_days(sub.next_renewal_date, now, days))
        .count()
}

/// Computes the overview for the range-filtered collection.
///
/// `upcoming_renewals` is always counted over the full `subscriptions`
/// slice from `now`, independent of the requested range.
pub fn get_overview(
    subscriptions: &[Subscription],
    range_key: Option<&str>,
    now: DateTime<Utc>,
) -> Overview {
    let filtered = filter_by_range(subscriptions, range_key, now);

    let monthly_spend = sum_money(filtered.iter().map(Subscription::monthly_amount));
    let annual_projection = scale_money(monthly_spend, Decimal::from(12));
    let cost_per_day = monthly_spend / Decimal::from(DAYS_PER_MONTH);

    let active_subscriptions = filtered.iter().filter(|sub| !sub.is_cancelled()).count();
    let category_count = filtered
        .iter()
        .map(Subscription::category_or_default)
        .collect::<HashSet<_>>()
        .len();

    Overview {
        total_subscriptions: filtered.len(),
        active_subscriptions,
        monthly_spend: round_money(monthly_spend),
        annual_projection: round_money(annual_projection),
        cost_per_day: round_money(cost_per_day),
        upcoming_renewals: count_upcoming_renewals(subscriptions, RENEWAL_WINDOW_DAYS, now),
        category_count,
    }
}

/// Month-by-month spend, oldest bucket first, ending at the current month.
///
/// Buckets sum the raw `amount` of subscriptions that started in that
/// calendar month; amounts are not normalized to a monthly equivalent.
/// Empty buckets are kept with a total of zero.
pub fn spending_trend(
    subscriptions: &[Subscription],
    range_key: Option<&str>,
    now: DateTime<Utc>,
) -> Vec<TrendPoint> {
    let filtered = filter_by_range(subscriptions, range_key, now);
    let today = now.date_naive();

    let bucket_count = match DateRange::parse(range_key) {
        None => DEFAULT_TREND_MONTHS,
        Some(DateRange::All) => {
            let earliest = filtered
                .iter()
                .filter_map(|sub| sub.start_date.map(|d| d.date_naive()))
                .min()
                .unwrap_or_else(|| minus_months(today, 12));
            let span = whole_months_between(earliest, today) + 1;
            span.max(MIN_ALL_TREND_MONTHS as i64) as u32
        }
        Some(range) => range.months().unwrap_or(DEFAULT_TREND_MONTHS),
    };

    let mut totals: HashMap<YearMonth, Decimal> = HashMap::new();
    for sub in &filtered {
        if let Some(start) = sub.start_date {
            let total = totals
                .entry(YearMonth::from_date(start.date_naive()))
                .or_insert(Decimal::ZERO);
            *total = add_money(*total, sub.amount);
        }
    }

    let current = YearMonth::from_date(today);
    (0..bucket_count)
        .rev()
        .map(|offset| {
            let period = current.minus_months(offset);
            TrendPoint {
                month: period.short_month_name().to_string(),
                year: period.year,
                total: round_money(totals.get(&period).copied().unwrap_or(Decimal::ZERO)),
            }
        })
        .collect()
}

/// Raw amount per category in first-seen order.
pub fn category_breakdown(subscriptions: &[Subscription]) -> Vec<CategoryTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for sub in subscriptions {
        let category = sub.category_or_default();
        match index.get(category) {
            Some(&i) => totals[i].value = add_money(totals[i].value, sub.amount),
            None => {
                index.insert(category, totals.len());
                totals.push(CategoryTotal {
                    name: category.to_string(),
                    value: sub.amount,
                });
            }
        }
    }

    for total in &mut totals {
        total.value = round_money(total.value);
    }
    totals
}

/// Occurrences per stored billing-cycle label in first-seen order.
pub fn billing_cycle_mix(subscriptions: &[Subscription]) -> Vec<CycleCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CycleCount> = Vec::new();

    for sub in subscriptions {
        let cycle = sub.billing_cycle_or_default();
        match index.get(cycle) {
            Some(&i) => counts[i].value += 1,
            None => {
                index.insert(cycle, counts.len());
                counts.push(CycleCount {
                    name: cycle.to_string(),
                    value: 1,
                });
            }
        }
    }
    counts
}

/// Subscriptions sorted by descending raw amount, stable on ties.
pub(crate) fn sorted_by_amount_desc(subscriptions: &[Subscription]) -> Vec<&Subscription> {
    let mut sorted: Vec<&Subscription> = subscriptions.iter().collect();
    sorted.sort_by(|a, b| b.amount.cmp(&a.amount));
    sorted
}

/// The five most expensive subscriptions by raw amount.
pub fn top_subscriptions(subscriptions: &[Subscription]) -> Vec<TopSubscription> {
    sorted_by_amount_desc(subscriptions)
        .into_iter()
        .take(TOP_SUBSCRIPTIONS_LIMIT)
        .map(|sub| TopSubscription {
            name: sub.name.clone(),
            amount: round_money(sub.amount),
            category: sub.category.clone(),
        })
        .collect()
}

/// Forward projection derived from the unfiltered overview.
pub fn projections(subscriptions: &[Subscription], now: DateTime<Utc>) -> Projections {
    let overview = get_overview(subscriptions, None, now);
    let annual_projection = overview.annual_projection;
    let monthly_projection = annual_projection / Decimal::from(12);

    Projections {
        annual_projection,
        monthly_projection: round_money(monthly_projection),
        // Sign of the unrounded figure; sub-cent spend reads as increasing
        trend: if monthly_projection > Decimal::ZERO {
            ProjectionTrend::Increasing
        } else {
            ProjectionTrend::Flat
        },
    }
}
