//! Task Form Page
//!
//! Edit form for an existing task, or the create form when no id is given.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::{TaskPriority, TaskStatus};
use crate::route::Route;
use crate::state::{FieldUpdate, FormController, FormMode, FormPhase, SubmitOutcome};

#[component]
pub fn TaskFormPage(task_id: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(match task_id {
        Some(id) => FormController::edit(id),
        None => FormController::create(),
    });

    // Edit mode: fetch the task once
    if let Some(id) = form.with_untracked(|f| f.load_target().map(str::to_string)) {
        let client = ctx.client();
        spawn_local(async move {
            let result = client.get_task(&id).await;
            form.update(|f| f.finish_load(result));
        });
    }

    let phase = Memo::new(move |_| form.with(|f| f.phase().clone()));
    let back_to_list = move |_: leptos::ev::MouseEvent| ctx.navigate(Route::Tasks);

    move || match phase.get() {
        FormPhase::Loading => view! {
            <div class="page form-page">
                <div class="card">
                    <div class="skeleton heading"></div>
                    <div class="skeleton field"></div>
                    <div class="skeleton textarea"></div>
                    <div class="skeleton field"></div>
                </div>
            </div>
        }
        .into_any(),
        FormPhase::NotFound => view! {
            <div class="page centered">
                <div class="card">
                    <div class="text-destructive">"Task not found"</div>
                    <button class="btn" on:click=back_to_list>"Back to Tasks"</button>
                </div>
            </div>
        }
        .into_any(),
        FormPhase::LoadFailed(message) => view! {
            <div class="page centered">
                <div class="card">
                    <div class="text-destructive">{message}</div>
                    <button class="btn" on:click=back_to_list>"Back to Tasks"</button>
                </div>
            </div>
        }
        .into_any(),
        FormPhase::Ready => view! { <TaskFormFields form=form /> }.into_any(),
    }
}

#[component]
fn TaskFormFields(form: RwSignal<FormController>) -> impl IntoView {
    let ctx = use_app_context();
    let is_create = form.with_untracked(|f| *f.mode() == FormMode::Create);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // validation failures are recorded on the form and nothing is sent
        let Some(Ok(req)) = form.try_update(|f| f.begin_submit()) else {
            return;
        };
        let client = ctx.client();
        spawn_local(async move {
            let result = match &req.task_id {
                Some(id) => client.update_task(id, &req.payload).await,
                None => client.create_task(&req.payload).await,
            };
            if let Some(SubmitOutcome::Saved) = form.try_update(|f| f.finish_submit(result)) {
                ctx.navigate(ctx.route.get_untracked().parent());
            }
        });
    };

    let cancel = move |_: leptos::ev::MouseEvent| ctx.navigate(ctx.route.get_untracked().parent());

    let submitting = Memo::new(move |_| form.with(|f| f.is_submitting()));
    let can_submit = Memo::new(move |_| form.with(|f| f.can_submit()));
    let error = Memo::new(move |_| form.with(|f| f.error().map(str::to_string)));
    let status = Memo::new(move |_| form.with(|f| f.draft().status));
    let priority = Memo::new(move |_| form.with(|f| f.draft().priority));

    view! {
        <div class="page form-page">
            <div class="card">
                <h2 class="card-title">{if is_create { "Add Task" } else { "Edit Task" }}</h2>
                <form class="task-form" on:submit=on_submit>
                    {move || error.get().map(|message| view! { <div class="alert destructive">{message}</div> })}

                    <label>
                        "Title *"
                        <input
                            type="text"
                            required=true
                            placeholder="Enter task title"
                            prop:value=move || form.with(|f| f.draft().title.clone())
                            on:input=move |ev| form.update(|f| f.update_field(FieldUpdate::Title(event_target_value(&ev))))
                        />
                    </label>

                    <label>
                        "Description"
                        <textarea
                            rows="4"
                            placeholder="Enter task description"
                            prop:value=move || form.with(|f| f.draft().description.clone())
                            on:input=move |ev| form.update(|f| f.update_field(FieldUpdate::Description(event_target_value(&ev))))
                        ></textarea>
                    </label>

                    <div class="form-row">
                        <label>
                            "Status"
                            <select on:change=move |ev| {
                                if let Some(s) = TaskStatus::parse(&event_target_value(&ev)) {
                                    form.update(|f| f.update_field(FieldUpdate::Status(s)));
                                }
                            }>
                                {TaskStatus::ALL.into_iter().map(|s| view! {
                                    <option value=s.as_str() selected=move || status.get() == s>{s.label()}</option>
                                }).collect_view()}
                            </select>
                        </label>
                        <label>
                            "Priority"
                            <select on:change=move |ev| {
                                if let Some(p) = TaskPriority::parse(&event_target_value(&ev)) {
                                    form.update(|f| f.update_field(FieldUpdate::Priority(p)));
                                }
                            }>
                                {TaskPriority::ALL.into_iter().map(|p| view! {
                                    <option value=p.as_str() selected=move || priority.get() == p>{p.label()}</option>
                                }).collect_view()}
                            </select>
                        </label>
                    </div>

                    <label>
                        "Due Date"
                        <input
                            type="datetime-local"
                            prop:value=move || form.with(|f| f.draft().due_date.clone())
                            on:input=move |ev| form.update(|f| f.update_field(FieldUpdate::DueDate(event_target_value(&ev))))
                        />
                    </label>

                    <div class="form-actions">
                        <button type="submit" class="btn" disabled=move || !can_submit.get()>
                            {move || match (submitting.get(), is_create) {
                                (true, true) => "Creating...",
                                (true, false) => "Updating...",
                                (false, true) => "Create Task",
                                (false, false) => "Update Task",
                            }}
                        </button>
                        <button type="button" class="btn outline" on:click=cancel>"Cancel"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
