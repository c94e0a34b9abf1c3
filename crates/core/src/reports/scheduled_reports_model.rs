//! Scheduled report models.

use chrono::{DateTime, Months, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::reports_model::{ReportFilters, ReportKind, ReportRequest};
use super::schedule::{calculate_next_run, ScheduleFrequency};

const DEFAULT_SCHEDULE_NAME: &str = "Scheduled Report";
const EMAILED_REPORT_FORMAT: &str = "pdf";

/// A report the owner wants regenerated on a fixed cadence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledReport {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    /// "weekly", "monthly" or "quarterly"; anything else runs monthly.
    pub frequency: String,
    pub day_of_period: i32,
    pub email_delivery: bool,
    pub report_id: Option<String>,
    #[serde(rename = "type")]
    pub report_type: String,
    #[serde(default)]
    pub filters: ReportFilters,
    pub next_run: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ScheduledReport {
    pub fn frequency(&self) -> ScheduleFrequency {
        ScheduleFrequency::parse(Some(self.frequency.as_str()))
    }

    /// A schedule without a next run never fires.
    pub fn is_due(&self, now: NaiveDateTime) -> bool {
        self.next_run.is_some_and(|next| next <= now)
    }

    /// Request for the run at `now`: the month ending at `now`, narrowed to
    /// the schedule's categories only.
    pub fn to_report_request(&self, now: DateTime<Utc>) -> ReportRequest {
        ReportRequest {
            name: Some(self.name.clone()),
            report_type: Some(self.report_type.clone()),
            format: Some(EMAILED_REPORT_FORMAT.to_string()),
            filters: ReportFilters {
                categories: self.filters.categories.clone(),
                start_date: Some(now.checked_sub_months(Months::new(1)).unwrap_or(now)),
                end_date: Some(now),
                status: None,
            },
        }
    }

    /// Moves the schedule past the run at `now`.
    pub fn advance(&mut self, now: NaiveDateTime) {
        self.next_run = Some(calculate_next_run(self.frequency(), self.day_of_period, now));
        self.updated_at = now;
    }
}

/// Input model for creating a scheduled report.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewScheduledReport {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub day_of_period: Option<i32>,
    #[serde(default)]
    pub email_delivery: Option<bool>,
    #[serde(default)]
    pub report_id: Option<String>,
    #[serde(rename = "type", default)]
    pub report_type: Option<String>,
    #[serde(default)]
    pub filters: Option<ReportFilters>,
}

impl NewScheduledReport {
    /// Applies defaults and computes the first run.
    pub fn into_scheduled_report(self, owner_id: &str, now: NaiveDateTime) -> ScheduledReport {
        let mut schedule = ScheduledReport {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            name: self.name.unwrap_or_else(|| DEFAULT_SCHEDULE_NAME.to_string()),
            frequency: self
                .frequency
                .unwrap_or_else(|| ScheduleFrequency::Monthly.as_str().to_string()),
            day_of_period: self.day_of_period.unwrap_or(1),
            email_delivery: self.email_delivery.unwrap_or(false),
            report_id: self.report_id,
            report_type: self
                .report_type
                .unwrap_or_else(|| ReportKind::Summary.as_str().to_string()),
            filters: self.filters.unwrap_or_default(),
            next_run: None,
            created_at: now,
            updated_at: now,
        };
        schedule.advance(now);
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn schedule() -> ScheduledReport {
        NewScheduledReport {
            name: Some("Video spend".to_string()),
            frequency: Some("Quarterly".to_string()),
            day_of_period: Some(31),
            report_type: Some("category".to_string()),
            filters: Some(ReportFilters {
                categories: vec!["Video".to_string()],
                status: Some("active".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
        .into_scheduled_report("user-1", at(2024, 8, 10, 14))
    }

    #[test]
    fn test_new_schedule_defaults() {
        let schedule =
            NewScheduledReport::default().into_scheduled_report("user-1", at(2024, 6, 15, 14));
        assert_eq!(schedule.name, "Scheduled Report");
        assert_eq!(schedule.frequency, "monthly");
        assert_eq!(schedule.day_of_period, 1);
        assert!(!schedule.email_delivery);
        assert_eq!(schedule.report_type, "summary");
        assert_eq!(schedule.filters, ReportFilters::default());
        assert_eq!(schedule.next_run, Some(at(2024, 7, 1, 9)));
        assert!(Uuid::parse_str(&schedule.id).is_ok());
    }

    #[test]
    fn test_first_run_clamps_day_of_period() {
        assert_eq!(schedule().next_run, Some(at(2024, 11, 30, 9)));
    }

    #[test]
    fn test_is_due_at_or_after_next_run() {
        let mut schedule = schedule();
        assert!(!schedule.is_due(at(2024, 11, 30, 8)));
        assert!(schedule.is_due(at(2024, 11, 30, 9)));
        assert!(schedule.is_due(at(2024, 12, 2, 0)));

        schedule.next_run = None;
        assert!(!schedule.is_due(at(2030, 1, 1, 0)));
    }

    #[test]
    fn test_report_request_covers_previous_month() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 9, 0, 0).unwrap();
        let request = schedule().to_report_request(now);

        assert_eq!(request.name.as_deref(), Some("Video spend"));
        assert_eq!(request.report_type.as_deref(), Some("category"));
        assert_eq!(request.format.as_deref(), Some("pdf"));
        assert_eq!(request.filters.categories, vec!["Video".to_string()]);
        assert_eq!(
            request.filters.start_date,
            Some(Utc.with_ymd_and_hms(2024, 2, 29, 9, 0, 0).unwrap())
        );
        assert_eq!(request.filters.end_date, Some(now));
        assert!(request.filters.status.is_none());
    }

    #[test]
    fn test_advance_recomputes_next_run() {
        let mut schedule = schedule();
        schedule.advance(at(2024, 11, 30, 9));
        assert_eq!(schedule.next_run, Some(at(2025, 2, 28, 9)));
        assert_eq!(schedule.updated_at, at(2024, 11, 30, 9));
    }

    #[test]
    fn test_deserializes_type_field() {
        let input: NewScheduledReport = serde_json::from_str(
            r#"{"name":"Weekly","frequency":"weekly","type":"annual","emailDelivery":true}"#,
        )
        .unwrap();
        assert_eq!(input.report_type.as_deref(), Some("annual"));
        assert_eq!(input.email_delivery, Some(true));
        assert!(input.filters.is_none());
    }
}
