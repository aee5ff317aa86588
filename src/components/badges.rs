//! Status and Priority Badges

use leptos::prelude::*;

use crate::models::{TaskPriority, TaskStatus};

#[component]
pub fn StatusBadge(status: TaskStatus) -> impl IntoView {
    view! { <span class=status.badge_class()>{status.badge_text()}</span> }
}

#[component]
pub fn PriorityBadge(priority: TaskPriority) -> impl IntoView {
    view! { <span class=priority.badge_class()>{priority.as_str()}</span> }
}
