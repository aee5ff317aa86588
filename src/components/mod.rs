//! UI Components
//!
//! Leptos views over the controllers in `state`.

mod badges;
mod dashboard_page;
mod delete_confirm_dialog;
mod header;
mod pagination;
mod progress_bar;
mod task_filters;
mod task_form;
mod tasks_page;

pub use badges::{PriorityBadge, StatusBadge};
pub use dashboard_page::DashboardPage;
pub use delete_confirm_dialog::DeleteConfirmDialog;
pub use header::Header;
pub use pagination::Pagination;
pub use progress_bar::ProgressBar;
pub use task_filters::TaskFilters;
pub use task_form::TaskFormPage;
pub use tasks_page::TasksPage;
