use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Rounds a money figure to display precision, half away from zero.
///
/// Amounts are non-negative in practice, so this is round-half-up.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders a money figure for use inside a sentence, without trailing zeros.
pub fn display_money(value: Decimal) -> String {
    round_money(value).normalize().to_string()
}

fn saturated(positive: bool) -> Decimal {
    if positive {
        Decimal::MAX
    } else {
        Decimal::MIN
    }
}

/// Adds two money figures, saturating at the representable bounds.
pub fn add_money(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b)
        .unwrap_or_else(|| saturated(a.is_sign_positive()))
}

/// Multiplies a money figure by `factor`, saturating at the representable bounds.
pub fn scale_money(value: Decimal, factor: Decimal) -> Decimal {
    value
        .checked_mul(factor)
        .unwrap_or_else(|| saturated(value.is_sign_positive() == factor.is_sign_positive()))
}

/// Sums money figures with [`add_money`].
pub fn sum_money<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().fold(Decimal::ZERO, add_money)
}

/// Divides, returning zero when the divisor is zero.
pub fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}
