use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Largest accepted subscription amount, the range of a NUMERIC(12, 2) column
pub const MAX_SUBSCRIPTION_AMOUNT: Decimal = dec!(9999999999.99);

/// Currency assumed when a subscription or report has none
pub const DEFAULT_CURRENCY: &str = "USD";

/// Category label used for subscriptions without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Billing cycle label used for subscriptions without a cycle
pub const DEFAULT_BILLING_CYCLE: &str = "monthly";

/// Status assigned to new subscriptions and assumed when missing
pub const DEFAULT_STATUS: &str = "active";

/// Status excluded from active counts
pub const CANCELLED_STATUS: &str = "cancelled";

/// Horizon for "upcoming renewal" counts and lists
pub const RENEWAL_WINDOW_DAYS: i64 = 30;

/// Horizon for the "due next week" insight and renewal reminder e-mails
pub const REMINDER_WINDOW_DAYS: i64 = 7;

/// Lead time, in days, reported with notification preferences
pub const DEFAULT_REMINDER_DAYS: u32 = 2;

/// Look-back of the weekly summary report
pub const WEEKLY_SUMMARY_DAYS: i64 = 7;

/// Fixed divisor for cost-per-day; not calendar aware
pub const DAYS_PER_MONTH: i64 = 30;

/// Number of entries in top-subscription and top-vendor lists
pub const TOP_SUBSCRIPTIONS_LIMIT: usize = 5;

/// Number of notable subscriptions handed to the AI context
pub const NOTABLE_SUBSCRIPTIONS_LIMIT: usize = 15;

/// Number of optimization suggestions in a category report
pub const CATEGORY_SUGGESTIONS_LIMIT: usize = 3;

/// Trend buckets shown when no range is requested
pub const DEFAULT_TREND_MONTHS: u32 = 6;

/// Minimum trend buckets for the "all" range
pub const MIN_ALL_TREND_MONTHS: u32 = 12;

/// Months covered by the annual forecast
pub const FORECAST_MONTHS: u32 = 12;

/// Amplitude of the synthetic seasonality curve in the annual forecast
pub const FORECAST_SEASONAL_AMPLITUDE: f64 = 0.05;

/// Hour of day at which scheduled reports run
pub const SCHEDULE_RUN_HOUR: u32 = 9;
