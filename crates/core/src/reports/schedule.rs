use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::constants::SCHEDULE_RUN_HOUR;
use crate::utils::time_utils::{days_in_month, plus_months};

/// How often a scheduled report runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScheduleFrequency {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
}

impl ScheduleFrequency {
    /// Case-insensitive parse; anything unrecognized runs monthly.
    pub fn parse(frequency: Option<&str>) -> Self {
        match frequency.map(|f| f.trim().to_ascii_lowercase()).as_deref() {
            Some("weekly") => ScheduleFrequency::Weekly,
            Some("quarterly") => ScheduleFrequency::Quarterly,
            _ => ScheduleFrequency::Monthly,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleFrequency::Weekly => "weekly",
            ScheduleFrequency::Monthly => "monthly",
            ScheduleFrequency::Quarterly => "quarterly",
        }
    }
}

fn with_clamped_day(date: NaiveDate, day_of_period: i32) -> NaiveDate {
    let last = days_in_month(date) as i32;
    let day = day_of_period.clamp(1, last) as u32;
    date.with_day(day).unwrap_or(date)
}

/// Next run for a schedule created or updated at `now`.
///
/// Weekly schedules run one week from today. Monthly and quarterly ones run
/// one or three months out, on `day_of_period` clamped to the target month.
pub fn calculate_next_run(
    frequency: ScheduleFrequency,
    day_of_period: i32,
    now: NaiveDateTime,
) -> NaiveDateTime {
    let today = now.date();
    let target = match frequency {
        ScheduleFrequency::Weekly => today + Duration::weeks(1),
        ScheduleFrequency::Monthly => with_clamped_day(plus_months(today, 1), day_of_period),
        ScheduleFrequency::Quarterly => with_clamped_day(plus_months(today, 3), day_of_period),
    };
    let run_at = NaiveTime::from_hms_opt(SCHEDULE_RUN_HOUR, 0, 0).unwrap_or(NaiveTime::MIN);
    target.and_time(run_at)
}
