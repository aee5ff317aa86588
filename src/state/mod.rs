//! View Controllers
//!
//! DOM-free state machines behind each view. Views perform the requests these
//! hand out and feed the results back.

pub mod dashboard;
pub mod form;
pub mod list;
pub mod theme;

pub use dashboard::{DashboardPhase, DashboardState, DashboardStateStoreFields};
pub use form::{FieldUpdate, FormController, FormMode, FormPhase, SubmitOutcome};
pub use list::{ListController, ListRequest};
pub use theme::Theme;
