//! Reports module - report assembly, templates and scheduled reports.

mod report_assembler;
mod report_templates;
mod reports_model;
mod reports_service;
mod reports_traits;
mod schedule;
mod scheduled_reports_model;



pub use report_assembler::{
    apply_filters, assemble_report, build_annual_report, build_category_report,
    build_summary_report,
};
pub use report_templates::report_templates;
pub use reports_model::{
    AnnualReport, CategoryAmount, CategoryReport, DailyCost, ForecastPoint, GeneratedReport,
    HeadlineMetrics, ReportContent, ReportFilters, ReportKind, ReportRequest, ReportTemplate,
    SummaryReport, UpcomingRenewal, VendorEntry,
};
pub use reports_service::ReportService;
pub use reports_traits::{ReportServiceTrait, ScheduledReportRepositoryTrait};
pub use schedule::{calculate_next_run, ScheduleFrequency};
pub use scheduled_reports_model::{NewScheduledReport, ScheduledReport};
