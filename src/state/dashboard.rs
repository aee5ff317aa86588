//! Summary Stats Controller
//!
//! Aggregate counts plus a short recent-tasks list, fetched independently on
//! mount. The view leaves loading only when both have arrived.

use reactive_stores::Store;
use tracing::warn;

use crate::error::ApiError;
use crate::models::{DashboardStats, Task};

pub const STATS_FAILED: &str = "Failed to fetch stats";
pub const RECENT_FAILED: &str = "Failed to fetch recent tasks";

/// Share of `part` in `total`, 0 when `total` is 0
pub fn progress_fraction(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

impl DashboardStats {
    pub fn pending_fraction(&self) -> f64 {
        progress_fraction(self.pending_tasks, self.total_tasks)
    }

    pub fn in_progress_fraction(&self) -> f64 {
        progress_fraction(self.in_progress_tasks, self.total_tasks)
    }

    pub fn completed_fraction(&self) -> f64 {
        progress_fraction(self.completed_tasks, self.total_tasks)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardPhase {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Snapshot state. Lives in a reactive [`Store`] so the view can subscribe to
/// single fields.
#[derive(Debug, Clone, Default, Store)]
pub struct DashboardState {
    pub phase: DashboardPhase,
    pub stats: DashboardStats,
    pub recent: Vec<Task>,
    /// Generation of the latest fetch pair
    pub generation: u64,
    /// Halves of the current pair that have arrived
    pub pending_stats: Option<DashboardStats>,
    pub pending_recent: Option<Vec<Task>>,
}

impl DashboardState {
    /// Start (or retry) both fetches. Returns the generation to report back with.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.phase = DashboardPhase::Loading;
        self.pending_stats = None;
        self.pending_recent = None;
        self.generation
    }

    pub fn finish_stats(&mut self, generation: u64, result: Result<DashboardStats, ApiError>) {
        if !self.accepts(generation) {
            return;
        }
        match result {
            Ok(stats) => {
                self.pending_stats = Some(stats);
                self.settle();
            }
            Err(err) => self.fail(err, STATS_FAILED),
        }
    }

    pub fn finish_recent(&mut self, generation: u64, result: Result<Vec<Task>, ApiError>) {
        if !self.accepts(generation) {
            return;
        }
        match result {
            Ok(tasks) => {
                self.pending_recent = Some(tasks);
                self.settle();
            }
            Err(err) => self.fail(err, RECENT_FAILED),
        }
    }

    fn accepts(&self, generation: u64) -> bool {
        if generation != self.generation {
            warn!(generation, latest = self.generation, "dropping stale dashboard response");
            return false;
        }
        // first failure wins; the other half no longer matters
        self.phase == DashboardPhase::Loading
    }

    fn settle(&mut self) {
        match (self.pending_stats.take(), self.pending_recent.take()) {
            (Some(stats), Some(recent)) => {
                self.stats = stats;
                self.recent = recent;
                self.phase = DashboardPhase::Ready;
            }
            (stats, recent) => {
                self.pending_stats = stats;
                self.pending_recent = recent;
            }
        }
    }

    fn fail(&mut self, err: ApiError, message: &str) {
        warn!(%err, reason = message, "dashboard fetch failed");
        self.pending_stats = None;
        self.pending_recent = None;
        self.phase = DashboardPhase::Failed(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskPriority, TaskStatus};
    use pretty_assertions::assert_eq;

    fn stats() -> DashboardStats {
        DashboardStats { total_tasks: 10, pending_tasks: 3, in_progress_tasks: 2, completed_tasks: 5 }
    }

    fn recent() -> Vec<Task> {
        vec![Task {
            id: "r1".into(),
            title: "Recent".into(),
            description: None,
            status: TaskStatus::Pending,
            priority: TaskPriority::Low,
            due_date: None,
            created_at: None,
            updated_at: None,
        }]
    }

    #[test]
    fn test_progress_fraction_never_divides_by_zero() {
        assert_eq!(progress_fraction(0, 0), 0.0);
        assert_eq!(progress_fraction(7, 0), 0.0);
        assert_eq!(progress_fraction(1, 4), 0.25);
    }

    #[test]
    fn test_stats_fractions_scenario() {
        let s = stats();
        assert!((s.pending_fraction() - 0.3).abs() < 1e-9);
        assert!((s.in_progress_fraction() - 0.2).abs() < 1e-9);
        assert!((s.completed_fraction() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_ready_only_after_both_halves() {
        let mut state = DashboardState::default();
        let generation = state.begin();
        state.finish_recent(generation, Ok(recent()));
        assert_eq!(state.phase, DashboardPhase::Loading);
        state.finish_stats(generation, Ok(stats()));
        assert_eq!(state.phase, DashboardPhase::Ready);
        assert_eq!(state.stats, stats());
        assert_eq!(state.recent.len(), 1);
    }

    #[test]
    fn test_either_failure_fails_the_view() {
        let mut state = DashboardState::default();
        let generation = state.begin();
        state.finish_stats(generation, Ok(stats()));
        state.finish_recent(generation, Err(ApiError::Network("offline".into())));
        assert_eq!(state.phase, DashboardPhase::Failed(RECENT_FAILED.into()));

        let mut state = DashboardState::default();
        let generation = state.begin();
        state.finish_stats(generation, Err(ApiError::from_response(500, "")));
        // late success of the other half does not revive the view
        state.finish_recent(generation, Ok(recent()));
        assert_eq!(state.phase, DashboardPhase::Failed(STATS_FAILED.into()));
    }

    #[test]
    fn test_retry_reissues_both_and_ignores_old_generation() {
        let mut state = DashboardState::default();
        let first = state.begin();
        state.finish_stats(first, Err(ApiError::Network("offline".into())));

        let second = state.begin();
        assert_eq!(state.phase, DashboardPhase::Loading);
        state.finish_recent(first, Ok(recent()));
        state.finish_stats(second, Ok(stats()));
        assert_eq!(state.phase, DashboardPhase::Loading);
        state.finish_recent(second, Ok(Vec::new()));
        assert_eq!(state.phase, DashboardPhase::Ready);
        assert!(state.recent.is_empty());
    }
}
