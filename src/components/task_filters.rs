//! Task Filters
//!
//! Search box plus status and priority selects.

use leptos::prelude::*;

use crate::models::{TaskPriority, TaskStatus};
use crate::query::{PriorityFilter, StatusFilter, ALL};

#[component]
pub fn TaskFilters(
    #[prop(into)] search: Signal<String>,
    #[prop(into)] status: Signal<StatusFilter>,
    #[prop(into)] priority: Signal<PriorityFilter>,
    #[prop(into)] on_search: Callback<String>,
    #[prop(into)] on_status: Callback<StatusFilter>,
    #[prop(into)] on_priority: Callback<PriorityFilter>,
) -> impl IntoView {
    view! {
        <div class="card filters">
            <input
                type="text"
                placeholder="Search tasks..."
                prop:value=move || search.get()
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
            <select on:change=move |ev| on_status.run(StatusFilter::from_select(&event_target_value(&ev)))>
                <option value=ALL selected=move || status.get() == StatusFilter::All>"All Statuses"</option>
                {TaskStatus::ALL.into_iter().map(|s| view! {
                    <option value=s.as_str() selected=move || status.get().select_value() == s.as_str()>
                        {s.label()}
                    </option>
                }).collect_view()}
            </select>
            <select on:change=move |ev| on_priority.run(PriorityFilter::from_select(&event_target_value(&ev)))>
                <option value=ALL selected=move || priority.get() == PriorityFilter::All>"All Priorities"</option>
                {TaskPriority::ALL.into_iter().map(|p| view! {
                    <option value=p.as_str() selected=move || priority.get().select_value() == p.as_str()>
                        {p.label()}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}
