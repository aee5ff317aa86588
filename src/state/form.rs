//! Detail Form Controller
//!
//! Loads one task into an editable [`Draft`] and submits the draft as a full
//! replace. Also drives the create form, which starts from a blank draft.

use thiserror::Error;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::models::{to_datetime_local, Task, TaskPayload, TaskPriority, TaskStatus};

pub const UPDATE_FAILED: &str = "Failed to update task";
pub const CREATE_FAILED: &str = "Failed to create task";
pub const LOAD_FAILED: &str = "Failed to load task";

/// Editable copy of a task's fields
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Raw `datetime-local` text; empty means no due date
    pub due_date: String,
}

impl Draft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task.status,
            priority: task.priority,
            due_date: task.due_date.as_deref().map(to_datetime_local).unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> TaskPayload {
        let due_date = self.due_date.trim();
        TaskPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            priority: self.priority,
            due_date: (!due_date.is_empty()).then(|| due_date.to_string()),
        }
    }
}

/// One edit to a draft field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Title(String),
    Description(String),
    Status(TaskStatus),
    Priority(TaskPriority),
    DueDate(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormPhase {
    Loading,
    /// Terminal: the task does not exist
    NotFound,
    /// Terminal: the task could not be loaded
    LoadFailed(String),
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Title is required")]
    MissingTitle,
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the form is not ready")]
    NotReady,
}

/// A write the view must perform
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    /// `None` creates, `Some(id)` replaces
    pub task_id: Option<String>,
    pub payload: TaskPayload,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Saved; the view navigates back to the list
    Saved,
    /// Draft kept so the user can retry
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct FormController {
    mode: FormMode,
    phase: FormPhase,
    draft: Draft,
    submitting: bool,
    error: Option<String>,
}

impl FormController {
    /// Edit form; the view must fetch `id` and call [`Self::finish_load`]
    pub fn edit(id: impl Into<String>) -> Self {
        Self {
            mode: FormMode::Edit(id.into()),
            phase: FormPhase::Loading,
            draft: Draft::default(),
            submitting: false,
            error: None,
        }
    }

    /// Create form, editable immediately
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            phase: FormPhase::Ready,
            draft: Draft::default(),
            submitting: false,
            error: None,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Ready && !self.submitting
    }

    /// Id to fetch while loading
    pub fn load_target(&self) -> Option<&str> {
        match (&self.mode, &self.phase) {
            (FormMode::Edit(id), FormPhase::Loading) => Some(id),
            _ => None,
        }
    }

    pub fn finish_load(&mut self, result: Result<Task, ApiError>) {
        if self.phase != FormPhase::Loading {
            return;
        }
        match result {
            Ok(task) => {
                self.draft = Draft::from_task(&task);
                self.phase = FormPhase::Ready;
            }
            Err(err) if err.is_not_found() => {
                self.phase = FormPhase::NotFound;
            }
            Err(err) => {
                warn!(%err, "task load failed");
                self.phase = FormPhase::LoadFailed(LOAD_FAILED.to_string());
            }
        }
    }

    /// Local draft edit. No validation happens here.
    pub fn update_field(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Title(v) => self.draft.title = v,
            FieldUpdate::Description(v) => self.draft.description = v,
            FieldUpdate::Status(v) => self.draft.status = v,
            FieldUpdate::Priority(v) => self.draft.priority = v,
            FieldUpdate::DueDate(v) => self.draft.due_date = v,
        }
    }

    /// Validate and start a submit. Nothing is sent when this returns `Err`.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, SubmitError> {
        if self.phase != FormPhase::Ready {
            return Err(SubmitError::NotReady);
        }
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        if self.draft.title.trim().is_empty() {
            let err = SubmitError::MissingTitle;
            self.error = Some(err.to_string());
            return Err(err);
        }
        self.submitting = true;
        self.error = None;
        let task_id = match &self.mode {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id.clone()),
        };
        Ok(SubmitRequest { task_id, payload: self.draft.to_payload() })
    }

    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(()) => {
                info!(mode = ?self.mode, "task saved");
                SubmitOutcome::Saved
            }
            Err(err) => {
                warn!(%err, "task save failed");
                let fallback = match self.mode {
                    FormMode::Create => CREATE_FAILED,
                    FormMode::Edit(_) => UPDATE_FAILED,
                };
                let message = err.user_message(fallback);
                self.error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }
}
