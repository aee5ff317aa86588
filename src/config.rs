//! Client Configuration
//!
//! Collaborator location and transport tuning, resolved once at start-up.

/// Collaborator base URL used when `TASK_DASH_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Tasks per list page
pub const PAGE_SIZE: usize = 10;

/// Size of the dashboard's recent-tasks list
pub const RECENT_TASKS_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash, e.g. `http://localhost:8000/api`
    pub base_url: String,
    /// Extra attempts for idempotent requests that fail in transport
    pub retry_attempts: u32,
    /// Delay between those attempts
    pub retry_delay_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            retry_attempts: 2,
            retry_delay_ms: 300,
        }
    }

    /// Config baked in at compile time
    pub fn from_build_env() -> Self {
        match option_env!("TASK_DASH_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::with_base_url(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ApiConfig::with_base_url("https://tasks.example.com/api///");
        assert_eq!(config.base_url, "https://tasks.example.com/api");
        assert_eq!(config.url("/tasks"), "https://tasks.example.com/api/tasks");
        assert_eq!(config.url("dashboard/stats"), "https://tasks.example.com/api/dashboard/stats");
    }

    #[test]
    fn test_default_points_at_local_collaborator() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.retry_attempts, 2);
    }
}
