//! Tasks module - renewal reminders, weekly summaries and scheduled reports.

mod tasks_model;
mod tasks_service;
mod tasks_traits;


pub use tasks_model::TaskRunResult;
pub use tasks_service::ScheduledTaskService;
pub use tasks_traits::ScheduledTaskServiceTrait;
