//! Hash Routes
//!
//! `#/`, `#/tasks`, `#/tasks/new`, `#/tasks/edit/{id}`.

use percent_encoding::percent_decode_str;

use crate::query::encode_segment;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Tasks,
    NewTask,
    EditTask(String),
}

impl Route {
    /// Parse `location.hash`; anything unrecognized is the dashboard
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["tasks"] => Self::Tasks,
            ["tasks", "new"] => Self::NewTask,
            ["tasks", "edit", id] => {
                let id = percent_decode_str(id).decode_utf8_lossy().into_owned();
                Self::EditTask(id)
            }
            _ => Self::Dashboard,
        }
    }

    /// Where "Back" and "Cancel" lead: the forms return to the task list
    pub fn parent(&self) -> Self {
        match self {
            Self::NewTask | Self::EditTask(_) => Self::Tasks,
            Self::Dashboard | Self::Tasks => Self::Dashboard,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Self::Dashboard => "#/".to_string(),
            Self::Tasks => "#/tasks".to_string(),
            Self::NewTask => "#/tasks/new".to_string(),
            Self::EditTask(id) => format!("#/tasks/edit/{}", encode_segment(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_routes() {
        assert_eq!(Route::from_hash(""), Route::Dashboard);
        assert_eq!(Route::from_hash("#/"), Route::Dashboard);
        assert_eq!(Route::from_hash("#/tasks"), Route::Tasks);
        assert_eq!(Route::from_hash("#/tasks/"), Route::Tasks);
        assert_eq!(Route::from_hash("#/tasks/new"), Route::NewTask);
        assert_eq!(Route::from_hash("#/tasks/edit/abc"), Route::EditTask("abc".into()));
    }

    #[test]
    fn test_unknown_route_falls_back_to_dashboard() {
        assert_eq!(Route::from_hash("#/settings"), Route::Dashboard);
        assert_eq!(Route::from_hash("#/tasks/edit"), Route::Dashboard);
    }

    #[test]
    fn test_edit_id_is_escaped_and_restored() {
        let route = Route::EditTask("a b/c".into());
        assert_eq!(route.to_hash(), "#/tasks/edit/a%20b%2Fc");
        assert_eq!(Route::from_hash(&route.to_hash()), route);
    }

    #[test]
    fn test_forms_lead_back_to_the_list() {
        assert_eq!(Route::EditTask("t1".into()).parent(), Route::Tasks);
        assert_eq!(Route::NewTask.parent(), Route::Tasks);
        assert_eq!(Route::Tasks.parent(), Route::Dashboard);
    }
}
