use super::analytics_model::ComparisonRow;
use crate::subscriptions::Subscription;
use crate::utils::decimal_utils::round_money;

impl From<&Subscription> for ComparisonRow {
    fn from(sub: &Subscription) -> Self {
        ComparisonRow {
            id: sub.id.clone(),
            name: sub.name.clone(),
            amount: round_money(sub.amount),
            billing_cycle: sub.billing_cycle.clone(),
            category: sub.category.clone(),
        }
    }
}

/// Projects the requested subscriptions into comparison rows.
///
/// Rows follow the caller's id order. Ids with no match in `subscriptions`
/// are dropped without a placeholder.
pub fn compare(subscriptions: &[Subscription], ids: &[String]) -> Vec<ComparisonRow> {
    ids.iter()
        .filter_map(|id| subscriptions.iter().find(|sub| &sub.id == id))
        .map(ComparisonRow::from)
        .collect()
}
