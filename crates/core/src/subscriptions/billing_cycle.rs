//! Billing cycles and monthly-equivalent normalization.

use rust_decimal::Decimal;

use crate::utils::decimal_utils::scale_money;

/// Billing cycle of a subscription.
///
/// Parsed leniently from the stored free-text value: matching is
/// case-insensitive and anything unrecognized is treated as monthly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BillingCycle {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    SemiAnnual,
    Yearly,
}

impl BillingCycle {
    /// Parses a stored cycle string. `None` and unknown values map to `Monthly`.
    pub fn parse(cycle: Option<&str>) -> Self {
        let Some(cycle) = cycle else {
            return BillingCycle::Monthly;
        };
        match cycle.trim().to_ascii_lowercase().as_str() {
            "annual" | "yearly" => BillingCycle::Yearly,
            "semi-annual" => BillingCycle::SemiAnnual,
            "quarterly" => BillingCycle::Quarterly,
            "weekly" => BillingCycle::Weekly,
            _ => BillingCycle::Monthly,
        }
    }

    /// Converts an amount billed on this cycle into its monthly equivalent.
    pub fn to_monthly(&self, amount: Decimal) -> Decimal {
        match self {
            BillingCycle::Yearly => amount / Decimal::from(12),
            BillingCycle::SemiAnnual => amount / Decimal::from(6),
            BillingCycle::Quarterly => amount / Decimal::from(3),
            BillingCycle::Weekly => scale_money(amount, Decimal::from(4)),
            BillingCycle::Monthly => amount,
        }
    }
}

/// Monthly-equivalent of `amount` billed on the stored `billing_cycle`.
pub fn monthly_equivalent(amount: Decimal, billing_cycle: Option<&str>) -> Decimal {
    BillingCycle::parse(billing_cycle).to_monthly(amount)
}
