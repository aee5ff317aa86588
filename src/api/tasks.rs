//! Task Endpoints
//!
//! `/tasks` list, get, create, update and delete.

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Task, TaskPayload};
use crate::query::{encode_params, encode_segment, QueryState};

fn task_path(id: &str) -> String {
    format!("tasks/{}", encode_segment(id))
}

impl ApiClient {
    /// `GET /tasks?...` for the given query state
    pub async fn list_tasks(&self, query: &QueryState) -> Result<Vec<Task>, ApiError> {
        let path = format!("tasks?{}", query.to_query_string());
        let tasks: Option<Vec<Task>> = self.get_json(&path).await?;
        Ok(tasks.unwrap_or_default())
    }

    /// `GET /tasks?limit=n`, the first `limit` tasks in collaborator order
    pub async fn recent_tasks(&self, limit: usize) -> Result<Vec<Task>, ApiError> {
        let path = format!("tasks?{}", encode_params(&[("limit", limit.to_string())]));
        let tasks: Option<Vec<Task>> = self.get_json(&path).await?;
        Ok(tasks.unwrap_or_default())
    }

    pub async fn get_task(&self, id: &str) -> Result<Task, ApiError> {
        self.get_json(&task_path(id)).await
    }

    pub async fn create_task(&self, payload: &TaskPayload) -> Result<(), ApiError> {
        self.post_json("tasks", payload).await
    }

    /// Full replace of the task's editable fields
    pub async fn update_task(&self, id: &str, payload: &TaskPayload) -> Result<(), ApiError> {
        self.put_json(&task_path(id), payload).await
    }

    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&task_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_path_escapes_id() {
        assert_eq!(task_path("abc123"), "tasks/abc123");
        assert_eq!(task_path("../x"), "tasks/..%2Fx");
    }
}
