use chrono::{DateTime, Utc};

use super::tasks_model::TaskRunResult;
use crate::errors::Result;

/// Trait defining the periodic jobs a host scheduler triggers.
///
/// Each call handles every owner or schedule once. A failure for one owner
/// is recorded in the result and does not stop the run; only a failure to
/// list owners or schedules returns `Err`.
pub trait ScheduledTaskServiceTrait: Send + Sync {
    /// Daily: e-mails owners whose subscriptions renew within seven days.
    fn check_renewal_reminders(&self, now: DateTime<Utc>) -> Result<TaskRunResult>;

    /// Weekly: e-mails opted-in owners a summary of the last seven days.
    fn send_weekly_summaries(&self, now: DateTime<Utc>) -> Result<TaskRunResult>;

    /// Hourly: generates every due scheduled report and moves it to its
    /// next run.
    fn process_scheduled_reports(&self, now: DateTime<Utc>) -> Result<TaskRunResult>;
}
