use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::sync::Arc;

use super::tasks_model::TaskRunResult;
use super::tasks_traits::ScheduledTaskServiceTrait;
use crate::constants::REMINDER_WINDOW_DAYS;
use crate::errors::Result;
use crate::notifications::{
    build_renewal_reminder, weekly_summary_request, NotificationPreferencesRepositoryTrait,
    NotificationSenderTrait, OwnerPreferences,
};
use crate::reports::{ReportServiceTrait, ScheduledReport, ScheduledReportRepositoryTrait};
use crate::subscriptions::SubscriptionRepositoryTrait;

/// Outcome for one owner or schedule within a run.
enum Outcome {
    Completed,
    Skipped,
}

/// Service running the periodic notification and report jobs.
pub struct ScheduledTaskService {
    subscriptions: Arc<dyn SubscriptionRepositoryTrait>,
    preferences: Arc<dyn NotificationPreferencesRepositoryTrait>,
    schedules: Arc<dyn ScheduledReportRepositoryTrait>,
    reports: Arc<dyn ReportServiceTrait>,
    sender: Arc<dyn NotificationSenderTrait>,
}

impl ScheduledTaskService {
    pub fn new(
        subscriptions: Arc<dyn SubscriptionRepositoryTrait>,
        preferences: Arc<dyn NotificationPreferencesRepositoryTrait>,
        schedules: Arc<dyn ScheduledReportRepositoryTrait>,
        reports: Arc<dyn ReportServiceTrait>,
        sender: Arc<dyn NotificationSenderTrait>,
    ) -> Self {
        ScheduledTaskService {
            subscriptions,
            preferences,
            schedules,
            reports,
            sender,
        }
    }

    fn remind_owner(&self, owner: &OwnerPreferences, now: DateTime<Utc>) -> Result<Outcome> {
        if !owner.preferences.wants_renewal_reminders() {
            debug!("Owner {} has renewal reminders disabled", owner.owner_id);
            return Ok(Outcome::Skipped);
        }
        let upcoming = self
            .subscriptions
            .list_upcoming(&owner.owner_id, REMINDER_WINDOW_DAYS)?;
        let Some(reminder) = build_renewal_reminder(&upcoming, now) else {
            debug!("No upcoming renewals for owner {}", owner.owner_id);
            return Ok(Outcome::Skipped);
        };
        self.sender.send_renewal_reminder(&owner.owner_id, &reminder)?;
        debug!(
            "Sent renewal reminder with {} lines to owner {}",
            reminder.lines.len(),
            owner.owner_id
        );
        Ok(Outcome::Completed)
    }

    fn summarize_owner(&self, owner: &OwnerPreferences, now: DateTime<Utc>) -> Result<Outcome> {
        if !owner.preferences.wants_weekly_summary() {
            return Ok(Outcome::Skipped);
        }
        let report = self
            .reports
            .generate_report(&owner.owner_id, &weekly_summary_request(now))?;
        self.sender.send_weekly_summary(&owner.owner_id, &report)?;
        Ok(Outcome::Completed)
    }

    fn run_schedule(&self, mut schedule: ScheduledReport, now: DateTime<Utc>) -> Result<Outcome> {
        let accepts_email = self
            .preferences
            .find_preferences(&schedule.owner_id)?
            .is_some_and(|prefs| prefs.email_notifications);
        if !accepts_email {
            warn!(
                "Skipping scheduled report {}: owner {} not found or e-mail disabled",
                schedule.id, schedule.owner_id
            );
            return Ok(Outcome::Skipped);
        }

        let report = self
            .reports
            .generate_report(&schedule.owner_id, &schedule.to_report_request(now))?;

        if schedule.email_delivery {
            if let Err(e) = self
                .sender
                .send_scheduled_report(&schedule.owner_id, &schedule, &report)
            {
                warn!("Failed to deliver scheduled report {}: {}", schedule.id, e);
            }
        }

        schedule.advance(now.naive_utc());
        self.schedules.update_schedule(&schedule)?;
        debug!(
            "Scheduled report {} next runs at {:?}",
            schedule.id, schedule.next_run
        );
        Ok(Outcome::Completed)
    }
}

fn record(result: &mut TaskRunResult, key: &str, outcome: Result<Outcome>) {
    match outcome {
        Ok(Outcome::Completed) => result.add_completed(),
        Ok(Outcome::Skipped) => result.add_skipped(),
        Err(e) => {
            warn!("Task failed for {}: {}", key, e);
            result.add_failure(key, e);
        }
    }
}

impl ScheduledTaskServiceTrait for ScheduledTaskService {
    fn check_renewal_reminders(&self, now: DateTime<Utc>) -> Result<TaskRunResult> {
        let owners = self.preferences.list_owner_preferences()?;
        let mut result = TaskRunResult::default();
        for owner in &owners {
            record(&mut result, &owner.owner_id, self.remind_owner(owner, now));
        }
        info!("Renewal reminder check: {}", result.summary());
        Ok(result)
    }

    fn send_weekly_summaries(&self, now: DateTime<Utc>) -> Result<TaskRunResult> {
        let owners = self.preferences.list_owner_preferences()?;
        let mut result = TaskRunResult::default();
        for owner in &owners {
            record(&mut result, &owner.owner_id, self.summarize_owner(owner, now));
        }
        info!("Weekly summaries: {}", result.summary());
        Ok(result)
    }

    fn process_scheduled_reports(&self, now: DateTime<Utc>) -> Result<TaskRunResult> {
        let due: Vec<ScheduledReport> = self
            .schedules
            .list_schedules()?
            .into_iter()
            .filter(|schedule| schedule.is_due(now.naive_utc()))
            .collect();
        debug!("{} scheduled reports due at {}", due.len(), now);

        let mut result = TaskRunResult::default();
        for schedule in due {
            let id = schedule.id.clone();
            record(&mut result, &id, self.run_schedule(schedule, now));
        }
        info!("Scheduled report processing: {}", result.summary());
        Ok(result)
    }
}
