//! List View Controller
//!
//! Keeps the task list consistent with the query state. Every query change
//! yields exactly one [`ListRequest`]; the view performs it and hands the
//! result back through [`ListController::finish_load`].
//!
//! Mutations follow an invalidate-and-refetch contract: a successful delete
//! produces a fresh `ListRequest` for the current query instead of splicing
//! the local list.

use tracing::{info, warn};

use crate::config::PAGE_SIZE;
use crate::error::ApiError;
use crate::models::Task;
use crate::query::{PriorityFilter, QueryState, StatusFilter};

pub const LOAD_FAILED: &str = "Could not fetch tasks. Please try again later.";
pub const DELETE_FAILED: &str = "Failed to delete task";

/// Monotonic id of an issued request; only the latest one is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// A list fetch the view must perform
#[derive(Debug, Clone, PartialEq)]
pub struct ListRequest {
    pub ticket: Ticket,
    pub query: QueryState,
}

/// A delete the view must perform
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteRequest {
    pub task_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct ListController {
    query: QueryState,
    tasks: Vec<Task>,
    loading: bool,
    error: Option<String>,
    pending_delete: Option<Task>,
    deleting: bool,
    issued: u64,
}

impl ListController {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Accessors
    // ========================

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn pending_delete(&self) -> Option<&Task> {
        self.pending_delete.as_ref()
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// A full page suggests there may be more. An exact multiple of the page
    /// size therefore leaves "Next" enabled on the final page.
    pub fn has_next_page(&self) -> bool {
        self.tasks.len() >= PAGE_SIZE
    }

    pub fn has_previous_page(&self) -> bool {
        self.query.page > 0
    }

    // ========================
    // Loading
    // ========================

    /// Start a fetch for the current query. Also the manual retry.
    pub fn load(&mut self) -> ListRequest {
        self.issued += 1;
        self.loading = true;
        self.error = None;
        ListRequest { ticket: Ticket(self.issued), query: self.query.clone() }
    }

    /// Apply a finished fetch. Returns false when the response was stale and
    /// has been dropped.
    pub fn finish_load(&mut self, ticket: Ticket, result: Result<Vec<Task>, ApiError>) -> bool {
        if ticket != Ticket(self.issued) {
            warn!(?ticket, latest = self.issued, "dropping stale task list response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(tasks) => {
                self.tasks = tasks;
            }
            Err(err) => {
                warn!(%err, "task list load failed");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
        true
    }

    // ========================
    // Query Changes
    // ========================

    pub fn set_status_filter(&mut self, status: StatusFilter) -> Option<ListRequest> {
        if self.query.status == status {
            return None;
        }
        self.query.status = status;
        Some(self.load())
    }

    pub fn set_priority_filter(&mut self, priority: PriorityFilter) -> Option<ListRequest> {
        if self.query.priority == priority {
            return None;
        }
        self.query.priority = priority;
        Some(self.load())
    }

    pub fn set_search(&mut self, search: &str) -> Option<ListRequest> {
        if self.query.search == search {
            return None;
        }
        self.query.search = search.to_string();
        Some(self.load())
    }

    pub fn next_page(&mut self) -> Option<ListRequest> {
        if !self.has_next_page() {
            return None;
        }
        self.query.page += 1;
        Some(self.load())
    }

    pub fn previous_page(&mut self) -> Option<ListRequest> {
        if !self.has_previous_page() {
            return None;
        }
        self.query.page -= 1;
        Some(self.load())
    }

    // ========================
    // Delete
    // ========================

    /// Hold `task` as the delete candidate. Nothing is sent yet.
    pub fn request_delete(&mut self, task: Task) {
        if self.deleting {
            return;
        }
        self.pending_delete = Some(task);
    }

    pub fn cancel_delete(&mut self) {
        if self.deleting {
            return;
        }
        self.pending_delete = None;
    }

    /// Confirm the held candidate. `None` if there is none or a delete is
    /// already in flight.
    pub fn confirm_delete(&mut self) -> Option<DeleteRequest> {
        if self.deleting {
            return None;
        }
        let task = self.pending_delete.as_ref()?;
        self.deleting = true;
        Some(DeleteRequest { task_id: task.id.clone() })
    }

    /// Settle a delete. The candidate is cleared either way; success asks for
    /// a refetch of the current query.
    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> Option<ListRequest> {
        self.deleting = false;
        let task = self.pending_delete.take();
        match result {
            Ok(()) => {
                info!(id = task.as_ref().map(|t| t.id.as_str()), "task deleted");
                Some(self.load())
            }
            Err(err) => {
                warn!(%err, "task delete failed");
                self.error = Some(DELETE_FAILED.to_string());
                None
            }
        }
    }
}
