//! Relative date-range keys and the start-date window filter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::subscriptions::Subscription;
use crate::utils::time_utils::minus_months;

/// A trailing time window selected by a range key such as "3months".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateRange {
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "1year", alias = "yearly")]
    OneYear,
    #[serde(rename = "all")]
    All,
}

impl DateRange {
    /// Parses a range key, case-insensitively.
    ///
    /// Returns `None` for a missing, empty or unrecognized key. Callers treat
    /// `None` like `All` when filtering.
    pub fn parse(key: Option<&str>) -> Option<Self> {
        match key?.trim().to_ascii_lowercase().as_str() {
            "1month" => Some(DateRange::OneMonth),
            "3months" => Some(DateRange::ThreeMonths),
            "6months" => Some(DateRange::SixMonths),
            "1year" | "yearly" => Some(DateRange::OneYear),
            "all" => Some(DateRange::All),
            _ => None,
        }
    }

    /// Length of the window in calendar months; `None` for `All`.
    pub fn months(&self) -> Option<u32> {
        match self {
            DateRange::OneMonth => Some(1),
            DateRange::ThreeMonths => Some(3),
            DateRange::SixMonths => Some(6),
            DateRange::OneYear => Some(12),
            DateRange::All => None,
        }
    }
}

/// Keeps subscriptions whose start date falls in the window named by `range_key`.
///
/// The window is `[today - duration, today]` by calendar day, both ends
/// inclusive. "all", empty, missing and unknown keys return the input
/// unchanged. Under a bounded window a subscription without a start date is
/// always excluded.
pub fn filter_by_range(
    subscriptions: &[Subscription],
    range_key: Option<&str>,
    now: DateTime<Utc>,
) -> Vec<Subscription> {
    let Some(months) = DateRange::parse(range_key).and_then(|r| r.months()) else {
        return subscriptions.to_vec();
    };

    let today = now.date_naive();
    let window_start = minus_months(today, months);

    subscriptions
        .iter()
        .filter(|sub| {
            sub.start_date
                .map(|start| {
                    let day = start.date_naive();
                    day >= window_start && day <= today
                })
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn sub_started(id: &str, start: Option<DateTime<Utc>>) -> Subscription {
        Subscription {
            id: id.to_string(),
            name: id.to_string(),
            start_date: start,
            ..Default::default()
        }
    }

    fn ids(subs: &[Subscription]) -> Vec<&str> {
        subs.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!(DateRange::parse(Some("1month")), Some(DateRange::OneMonth));
        assert_eq!(DateRange::parse(Some("3Months")), Some(DateRange::ThreeMonths));
        assert_eq!(DateRange::parse(Some("yearly")), Some(DateRange::OneYear));
        assert_eq!(DateRange::parse(Some("ALL")), Some(DateRange::All));
        assert_eq!(DateRange::parse(Some("2weeks")), None);
        assert_eq!(DateRange::parse(Some("")), None);
        assert_eq!(DateRange::parse(None), None);
    }

    #[test]
    fn test_unfiltered_keys_return_input() {
        let subs = vec![
            sub_started("a", Some(now() - Duration::days(900))),
            sub_started("b", None),
        ];
        for key in [None, Some(""), Some("all"), Some("bogus")] {
            assert_eq!(ids(&filter_by_range(&subs, key, now())), vec!["a", "b"]);
        }
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let subs = vec![
            // Exactly one month back by calendar day
            sub_started("edge", Some(Utc.with_ymd_and_hms(2024, 5, 15, 0, 0, 0).unwrap())),
            sub_started("before", Some(Utc.with_ymd_and_hms(2024, 5, 14, 23, 59, 0).unwrap())),
            // Later the same day as now still counts
            sub_started("today", Some(Utc.with_ymd_and_hms(2024, 6, 15, 23, 0, 0).unwrap())),
            sub_started("future", Some(Utc.with_ymd_and_hms(2024, 6, 16, 0, 0, 0).unwrap())),
        ];
        let result = filter_by_range(&subs, Some("1month"), now());
        assert_eq!(ids(&result), vec!["edge", "today"]);
    }

    #[test]
    fn test_missing_start_date_is_excluded() {
        let subs = vec![sub_started("none", None), sub_started("recent", Some(now()))];
        let result = filter_by_range(&subs, Some("1year"), now());
        assert_eq!(ids(&result), vec!["recent"]);
    }
}
