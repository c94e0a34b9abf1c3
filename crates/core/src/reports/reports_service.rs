use chrono::Utc;
use log::{debug, warn};
use std::sync::Arc;
use uuid::Uuid;

use super::report_assembler::assemble_report;
use super::report_templates::report_templates;
use super::reports_model::{GeneratedReport, ReportKind, ReportRequest, ReportTemplate};
use super::reports_traits::ReportServiceTrait;
use crate::errors::Result;
use crate::subscriptions::SubscriptionRepositoryTrait;

const DEFAULT_REPORT_NAME: &str = "Generated Report";
const DEFAULT_REPORT_FORMAT: &str = "pdf";
const COMPLETED_STATUS: &str = "completed";

pub struct ReportService {
    repository: Arc<dyn SubscriptionRepositoryTrait>,
}

impl ReportService {
    pub fn new(repository: Arc<dyn SubscriptionRepositoryTrait>) -> Self {
        ReportService { repository }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl ReportServiceTrait for ReportService {
    fn generate_report(&self, owner_id: &str, request: &ReportRequest) -> Result<GeneratedReport> {
        let report_type = non_blank(request.report_type.as_deref())
            .unwrap_or(ReportKind::Summary.as_str())
            .to_string();
        let kind = ReportKind::parse(&report_type).unwrap_or_else(|| {
            warn!(
                "No assembler for report type '{}', building a summary instead",
                report_type
            );
            ReportKind::Summary
        });
        debug!(
            "Generating {} report for owner {} with filters {:?}",
            kind.as_str(),
            owner_id,
            request.filters
        );

        let all = self.repository.list_for_owner(owner_id, None, None)?;
        let now = Utc::now();
        let content = assemble_report(&all, kind, &request.filters, now);

        Ok(GeneratedReport {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            name: non_blank(request.name.as_deref())
                .unwrap_or(DEFAULT_REPORT_NAME)
                .to_string(),
            report_type,
            format: non_blank(request.format.as_deref())
                .unwrap_or(DEFAULT_REPORT_FORMAT)
                .to_string(),
            status: COMPLETED_STATUS.to_string(),
            filters: request.filters.clone(),
            content,
            created_at: now,
        })
    }

    fn get_templates(&self) -> Vec<ReportTemplate> {
        report_templates()
    }
}
