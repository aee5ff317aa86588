//! Task Query State
//!
//! Filters, search term and page that drive the task list request.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::PAGE_SIZE;
use crate::models::{TaskPriority, TaskStatus};

/// Characters left unescaped in query values (RFC 3986 unreserved)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Select value standing for "no filter"
pub const ALL: &str = "all";

/// A value a filter select can take besides "all"
pub trait FilterValue: Copy + PartialEq {
    fn as_str(self) -> &'static str;
    fn parse(value: &str) -> Option<Self>;
}

impl FilterValue for TaskStatus {
    fn as_str(self) -> &'static str {
        TaskStatus::as_str(self)
    }
    fn parse(value: &str) -> Option<Self> {
        TaskStatus::parse(value)
    }
}

impl FilterValue for TaskPriority {
    fn as_str(self) -> &'static str {
        TaskPriority::as_str(self)
    }
    fn parse(value: &str) -> Option<Self> {
        TaskPriority::parse(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: FilterValue> Filter<T> {
    /// Value for the `<select>` element
    pub fn select_value(self) -> &'static str {
        match self {
            Self::All => ALL,
            Self::Only(v) => v.as_str(),
        }
    }

    /// Parse a select value; anything unrecognized means "all"
    pub fn from_select(value: &str) -> Self {
        T::parse(value).map_or(Self::All, Self::Only)
    }

    /// Query parameter value, `None` when the filter is "all"
    pub fn param(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Only(v) => Some(v.as_str()),
        }
    }
}

pub type StatusFilter = Filter<TaskStatus>;
pub type PriorityFilter = Filter<TaskPriority>;

/// Current list query. Session-local, never persisted.
///
/// Changing a filter or the search term leaves `page` where it is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    pub status: StatusFilter,
    pub priority: PriorityFilter,
    pub search: String,
    /// Zero-based page index
    pub page: usize,
}

impl QueryState {
    pub fn skip(&self) -> usize {
        self.page * PAGE_SIZE
    }

    /// Request parameters in wire order.
    ///
    /// `skip` and `limit` are always present; filters equal to "all" and an
    /// empty search are omitted.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("skip", self.skip().to_string()),
            ("limit", PAGE_SIZE.to_string()),
        ];
        if let Some(status) = self.status.param() {
            params.push(("status", status.to_string()));
        }
        if let Some(priority) = self.priority.param() {
            params.push(("priority", priority.to_string()));
        }
        if !self.search.is_empty() {
            params.push(("search", self.search.clone()));
        }
        params
    }

    pub fn to_query_string(&self) -> String {
        encode_params(&self.to_params())
    }
}

pub fn encode_params(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Escape a single path segment such as a task id
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, QUERY_VALUE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_query_sends_only_paging() {
        let query = QueryState::default();
        assert_eq!(query.to_query_string(), "skip=0&limit=10");
    }

    #[test]
    fn test_completed_filter_scenario() {
        let query = QueryState {
            status: Filter::Only(TaskStatus::Completed),
            ..Default::default()
        };
        assert_eq!(query.to_query_string(), "skip=0&limit=10&status=completed");
    }

    #[test]
    fn test_all_parameters_present() {
        let query = QueryState {
            status: Filter::Only(TaskStatus::InProgress),
            priority: Filter::Only(TaskPriority::High),
            search: "fix bug & ship".into(),
            page: 2,
        };
        assert_eq!(
            query.to_query_string(),
            "skip=20&limit=10&status=in_progress&priority=high&search=fix%20bug%20%26%20ship"
        );
    }

    #[test]
    fn test_whitespace_search_is_still_sent() {
        let query = QueryState { search: " ".into(), ..Default::default() };
        assert_eq!(query.to_params().last().unwrap(), &("search", " ".to_string()));
    }

    #[test]
    fn test_filter_select_values() {
        assert_eq!(StatusFilter::from_select("all"), Filter::All);
        assert_eq!(StatusFilter::from_select("pending"), Filter::Only(TaskStatus::Pending));
        assert_eq!(PriorityFilter::from_select("bogus"), Filter::All);
        assert_eq!(Filter::Only(TaskPriority::Low).select_value(), "low");
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(encode_segment("60d5ec49f7b4c6a3b0a0a0a0"), "60d5ec49f7b4c6a3b0a0a0a0");
        assert_eq!(encode_segment("a/b c"), "a%2Fb%20c");
    }
}
