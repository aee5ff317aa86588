//! Tasks Page
//!
//! Filterable, paginated task table with delete confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmDialog, Pagination, PriorityBadge, StatusBadge, TaskFilters};
use crate::context::use_app_context;
use crate::models::Task;
use crate::query::{PriorityFilter, StatusFilter};
use crate::route::Route;
use crate::state::{ListController, ListRequest};

/// Rows shown while the first page loads
const SKELETON_ROWS: usize = 5;

#[component]
pub fn TasksPage() -> impl IntoView {
    let ctx = use_app_context();
    let ctrl = RwSignal::new(ListController::new());

    // Perform a fetch the controller asked for and hand the result back
    let dispatch = move |req: ListRequest| {
        let client = ctx.client();
        spawn_local(async move {
            let result = client.list_tasks(&req.query).await;
            ctrl.update(|c| {
                c.finish_load(req.ticket, result);
            });
        });
    };
    let run = move |f: fn(&mut ListController) -> Option<ListRequest>| {
        if let Some(req) = ctrl.try_update(f).flatten() {
            dispatch(req);
        }
    };

    // Initial load
    if let Some(req) = ctrl.try_update(|c| c.load()) {
        dispatch(req);
    }

    let confirm_delete = move |_: ()| {
        let Some(del) = ctrl.try_update(|c| c.confirm_delete()).flatten() else {
            return;
        };
        let client = ctx.client();
        spawn_local(async move {
            let result = client.delete_task(&del.task_id).await;
            if let Some(req) = ctrl.try_update(|c| c.finish_delete(result)).flatten() {
                dispatch(req);
            }
        });
    };

    let loading = Memo::new(move |_| ctrl.with(|c| c.is_loading()));
    let error = Memo::new(move |_| ctrl.with(|c| c.error().map(str::to_string)));
    let tasks = Memo::new(move |_| ctrl.with(|c| c.tasks().to_vec()));

    view! {
        <div class="page tasks-page">
            <div class="page-header">
                <h1>"Tasks"</h1>
                <button class="btn" on:click=move |_| ctx.navigate(Route::NewTask)>"Add Task"</button>
            </div>

            {move || error.get().map(|message| view! {
                <div class="alert destructive">
                    <strong>"Error"</strong>
                    <p>{message}</p>
                    <button class="btn outline" on:click=move |_| run(|c| Some(c.load()))>"Retry"</button>
                </div>
            })}

            <TaskFilters
                search=Signal::derive(move || ctrl.with(|c| c.query().search.clone()))
                status=Signal::derive(move || ctrl.with(|c| c.query().status))
                priority=Signal::derive(move || ctrl.with(|c| c.query().priority))
                on_search=Callback::new(move |value: String| {
                    if let Some(req) = ctrl.try_update(|c| c.set_search(&value)).flatten() {
                        dispatch(req);
                    }
                })
                on_status=Callback::new(move |status: StatusFilter| {
                    if let Some(req) = ctrl.try_update(|c| c.set_status_filter(status)).flatten() {
                        dispatch(req);
                    }
                })
                on_priority=Callback::new(move |priority: PriorityFilter| {
                    if let Some(req) = ctrl.try_update(|c| c.set_priority_filter(priority)).flatten() {
                        dispatch(req);
                    }
                })
            />

            <div class="card">
                <table class="task-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Status"</th>
                            <th>"Priority"</th>
                            <th>"Due Date"</th>
                            <th class="actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() {
                                (0..SKELETON_ROWS)
                                    .map(|_| view! { <tr><td colspan="5"><div class="skeleton row"></div></td></tr> })
                                    .collect_view()
                                    .into_any()
                            } else if tasks.with(Vec::is_empty) {
                                view! { <tr><td colspan="5" class="empty">"No tasks found."</td></tr> }.into_any()
                            } else {
                                view! {
                                    <For
                                        each=move || tasks.get()
                                        key=|task| task.id.clone()
                                        children=move |task: Task| view! {
                                            <TaskRow
                                                task=task
                                                on_delete=Callback::new(move |task: Task| ctrl.update(|c| c.request_delete(task)))
                                            />
                                        }
                                    />
                                }
                                .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <Pagination
                page=Signal::derive(move || ctrl.with(|c| c.query().page))
                has_previous=Signal::derive(move || ctrl.with(|c| c.has_previous_page()))
                has_next=Signal::derive(move || ctrl.with(|c| c.has_next_page()))
                on_previous=Callback::new(move |_: ()| run(ListController::previous_page))
                on_next=Callback::new(move |_: ()| run(ListController::next_page))
            />

            <DeleteConfirmDialog
                task_title=Signal::derive(move || ctrl.with(|c| c.pending_delete().map(|t| t.title.clone())))
                busy=Signal::derive(move || ctrl.with(|c| c.is_deleting()))
                on_confirm=Callback::new(confirm_delete)
                on_cancel=Callback::new(move |_: ()| ctrl.update(|c| c.cancel_delete()))
            />
        </div>
    }
}

#[component]
fn TaskRow(task: Task, #[prop(into)] on_delete: Callback<Task>) -> impl IntoView {
    let ctx = use_app_context();
    let id = task.id.clone();
    let due = task.due_date_display();
    let (status, priority) = (task.status, task.priority);
    let title = task.title.clone();

    view! {
        <tr>
            <td class="title">{title}</td>
            <td><StatusBadge status=status /></td>
            <td><PriorityBadge priority=priority /></td>
            <td>{due}</td>
            <td class="actions">
                <button class="btn ghost" on:click=move |_| ctx.navigate(Route::EditTask(id.clone()))>"Edit"</button>
                <button class="btn ghost destructive" on:click=move |_| on_delete.run(task.clone())>"Delete"</button>
            </td>
        </tr>
    }
}
