use super::reports_model::{GeneratedReport, ReportRequest, ReportTemplate};
use super::scheduled_reports_model::ScheduledReport;
use crate::errors::Result;

/// Trait defining the contract for report generation.
pub trait ReportServiceTrait: Send + Sync {
    /// Builds a report over the owner's subscriptions.
    fn generate_report(&self, owner_id: &str, request: &ReportRequest) -> Result<GeneratedReport>;

    fn get_templates(&self) -> Vec<ReportTemplate>;
}

/// Trait defining the contract of the scheduled report store.
pub trait ScheduledReportRepositoryTrait: Send + Sync {
    /// Every stored schedule, across all owners.
    fn list_schedules(&self) -> Result<Vec<ScheduledReport>>;

    fn update_schedule(&self, schedule: &ScheduledReport) -> Result<()>;
}
