//! Content of renewal reminders and the weekly summary request.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::WEEKLY_SUMMARY_DAYS;
use crate::reports::{ReportFilters, ReportKind, ReportRequest};
use crate::subscriptions::Subscription;
use crate::utils::decimal_utils::{round_money, sum_money};

const WEEKLY_SUMMARY_NAME: &str = "Weekly Summary Report";
const EMAILED_REPORT_FORMAT: &str = "pdf";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderLine {
    pub subscription_id: String,
    pub name: String,
    pub currency: String,
    pub amount: Decimal,
    /// "today", "tomorrow" or "N days".
    pub renews_in: String,
}

/// One reminder e-mail listing every subscription renewing soon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenewalReminder {
    pub lines: Vec<ReminderLine>,
    pub total_amount: Decimal,
    /// Currency of the first renewal; amounts are not converted.
    pub currency: String,
}

fn renews_in_text(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        n => format!("{} days", n),
    }
}

/// Builds the reminder for `upcoming` renewals, or `None` when there are none.
pub fn build_renewal_reminder(
    upcoming: &[Subscription],
    now: DateTime<Utc>,
) -> Option<RenewalReminder> {
    let first = upcoming.first()?;

    let lines = upcoming
        .iter()
        .map(|sub| {
            let days = sub
                .next_renewal_date
                .map(|renewal| (renewal - now).num_days())
                .unwrap_or(0);
            ReminderLine {
                subscription_id: sub.id.clone(),
                name: sub.name.clone(),
                currency: sub.currency_or_default().to_string(),
                amount: round_money(sub.amount),
                renews_in: renews_in_text(days),
            }
        })
        .collect();

    Some(RenewalReminder {
        lines,
        total_amount: round_money(sum_money(upcoming.iter().map(|s| s.amount))),
        currency: first.currency_or_default().to_string(),
    })
}

/// Summary report over the seven days ending at `now`.
pub fn weekly_summary_request(now: DateTime<Utc>) -> ReportRequest {
    ReportRequest {
        name: Some(WEEKLY_SUMMARY_NAME.to_string()),
        report_type: Some(ReportKind::Summary.as_str().to_string()),
        format: Some(EMAILED_REPORT_FORMAT.to_string()),
        filters: ReportFilters {
            start_date: Some(now - Duration::days(WEEKLY_SUMMARY_DAYS)),
            end_date: Some(now),
            ..Default::default()
        },
    }
}
