//! Human-readable insight sentences.

use std::iter::FusedIterator;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::aggregation::count_upcoming_renewals;
use crate::constants::REMINDER_WINDOW_DAYS;
use crate::subscriptions::Subscription;
use crate::utils::decimal_utils::{display_money, safe_div, sum_money};

const EMPTY_PROMPT: &str = "Add your first subscription to unlock analytics.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Count,
    Average,
    Renewals,
    Done,
}

/// Lazily produced insight sentences for a subscription collection.
///
/// Each sentence is computed when requested. The iterator is finite and
/// consumed by iteration; build a new one to start over.
#[derive(Debug)]
pub struct Insights<'a> {
    subscriptions: &'a [Subscription],
    now: DateTime<Utc>,
    stage: Stage,
}

/// Insights over the owner's full collection.
pub fn insights(subscriptions: &[Subscription], now: DateTime<Utc>) -> Insights<'_> {
    Insights {
        subscriptions,
        now,
        stage: Stage::Count,
    }
}

impl Iterator for Insights<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match self.stage {
                Stage::Count => {
                    if self.subscriptions.is_empty() {
                        self.stage = Stage::Done;
                        return Some(EMPTY_PROMPT.to_string());
                    }
                    self.stage = Stage::Average;
                    return Some(format!(
                        "You currently manage {} subscriptions.",
                        self.subscriptions.len()
                    ));
                }
                Stage::Average => {
                    self.stage = Stage::Renewals;
                    let total = sum_money(self.subscriptions.iter().map(|s| s.amount));
                    let average = safe_div(total, Decimal::from(self.subscriptions.len()));
                    return Some(format!(
                        "Average subscription cost is {}",
                        display_money(average)
                    ));
                }
                Stage::Renewals => {
                    self.stage = Stage::Done;
                    let due =
                        count_upcoming_renewals(self.subscriptions, REMINDER_WINDOW_DAYS, self.now);
                    if due > 0 {
                        return Some(format!("{} renewals due in the next week.", due));
                    }
                }
                Stage::Done => return None,
            }
        }
    }
}

impl FusedIterator for Insights<'_> {}
