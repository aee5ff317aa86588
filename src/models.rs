//! Frontend Models
//!
//! Data structures matching the task collaborator's JSON.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Shown when a task carries no description
pub const NO_DESCRIPTION: &str = "No description";
/// Shown when a task carries no due date
pub const NO_DUE_DATE: &str = "N/A";

// ========================
// Enumerations
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    /// Wire value, also used as the `<select>` option value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// Option label for selects
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Badge text: the wire value with underscores shown as spaces
    pub fn badge_text(self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Completed => "badge badge-status completed",
            Self::InProgress => "badge badge-status in-progress",
            Self::Pending => "badge badge-status pending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::High => "badge badge-priority high",
            Self::Medium => "badge badge-priority medium",
            Self::Low => "badge badge-priority low",
        }
    }
}

// ========================
// Records
// ========================

/// Task record as returned by the collaborator.
///
/// Only `_id` and `title` are required on the wire; everything else falls
/// back to its default so a partial record still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: TaskPriority,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Treat an explicit `null` the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Task {
    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => NO_DESCRIPTION,
        }
    }

    pub fn due_date_display(&self) -> String {
        format_due_date(self.due_date.as_deref())
    }
}

/// Aggregate counts from `GET /dashboard/stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub total_tasks: u64,
    pub pending_tasks: u64,
    pub in_progress_tasks: u64,
    pub completed_tasks: u64,
}

/// Body for `POST /tasks` and `PUT /tasks/{id}`: always the full editable set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskPayload {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<String>,
}

// ========================
// Formatting
// ========================

/// Format a due date as e.g. "Sep 15, 2025".
///
/// Absent or empty input yields "N/A"; text that is not a recognizable date
/// is returned as-is.
pub fn format_due_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return NO_DUE_DATE.to_string();
    };
    match parse_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Reshape a stored due date into the `YYYY-MM-DDTHH:MM` form a
/// `datetime-local` input accepts. Offsets are dropped, keeping the wall
/// time as written. Unrecognized text is kept as-is.
pub fn to_datetime_local(raw: &str) -> String {
    let raw = raw.trim();
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| {
            ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
                .into_iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        });
    match parsed {
        Some(dt) => dt.format("%Y-%m-%dT%H:%M").to_string(),
        None => raw.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_task_decodes_with_missing_optional_fields() {
        let task: Task = serde_json::from_str(r#"{"_id":"abc","title":"Write"}"#).unwrap();
        assert_eq!(task.id, "abc");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.priority, TaskPriority::Medium);
        assert_eq!(task.description_or_default(), "No description");
        assert_eq!(task.due_date_display(), "N/A");
    }

    #[test]
    fn test_null_enums_fall_back_without_failing_the_page() {
        let json = r#"[
            {"_id":"1","title":"ok"},
            {"_id":"2","title":"b","status":null,"priority":null}
        ]"#;
        let tasks: Vec<Task> = serde_json::from_str(json).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].status, TaskStatus::Pending);
        assert_eq!(tasks[1].priority, TaskPriority::Medium);
    }

    #[test]
    fn test_to_datetime_local_variants() {
        assert_eq!(to_datetime_local("2025-09-15T10:00:00Z"), "2025-09-15T10:00");
        assert_eq!(to_datetime_local("2025-09-15T10:00:00+02:00"), "2025-09-15T10:00");
        assert_eq!(to_datetime_local("2025-09-15T10:00:00.123"), "2025-09-15T10:00");
        assert_eq!(to_datetime_local("2025-09-15T10:00"), "2025-09-15T10:00");
        assert_eq!(to_datetime_local("2025-09-15"), "2025-09-15T00:00");
        assert_eq!(to_datetime_local("soon"), "soon");
    }

    #[test]
    fn test_task_decodes_full_record() {
        let json = r#"{
            "_id": "60d5ec49f7b4c6a3b0a0a0a0",
            "title": "Develop new feature",
            "description": "Implement user authentication using JWT.",
            "status": "in_progress",
            "priority": "high",
            "due_date": "2025-09-15T10:00:00Z",
            "created_at": "2025-08-29T12:00:00Z",
            "updated_at": "2025-08-29T14:30:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.due_date_display(), "Sep 15, 2025");
        assert_eq!(task.status.badge_text(), "in progress");
    }

    #[test]
    fn test_empty_description_falls_back() {
        let task: Task =
            serde_json::from_str(r#"{"id":"1","title":"t","description":""}"#).unwrap();
        assert_eq!(task.description_or_default(), NO_DESCRIPTION);
    }

    #[test]
    fn test_format_due_date_variants() {
        assert_eq!(format_due_date(None), "N/A");
        assert_eq!(format_due_date(Some("  ")), "N/A");
        assert_eq!(format_due_date(Some("2025-01-05T08:30")), "Jan 5, 2025");
        assert_eq!(format_due_date(Some("2025-01-05T08:30:00.123")), "Jan 5, 2025");
        assert_eq!(format_due_date(Some("2024-12-31")), "Dec 31, 2024");
        assert_eq!(format_due_date(Some("someday")), "someday");
    }

    #[test]
    fn test_payload_serializes_full_set() {
        let payload = TaskPayload {
            title: "t".into(),
            description: String::new(),
            status: TaskStatus::Completed,
            priority: TaskPriority::Low,
            due_date: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "t",
                "description": "",
                "status": "completed",
                "priority": "low",
                "due_date": null
            })
        );
    }

    #[test]
    fn test_enum_parse_round_trips_select_values() {
        assert_eq!(TaskStatus::parse("in_progress"), Some(TaskStatus::InProgress));
        assert_eq!(TaskStatus::parse("all"), None);
        assert_eq!(TaskPriority::parse("high"), Some(TaskPriority::High));
    }
}
