//! Dashboard Page
//!
//! Stat cards, recent tasks and status distribution. Fetched once on mount;
//! the only refresh is the Retry button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{PriorityBadge, ProgressBar, StatusBadge};
use crate::config::RECENT_TASKS_LIMIT;
use crate::context::use_app_context;
use crate::models::{DashboardStats, Task};
use crate::route::Route;
use crate::state::{DashboardPhase, DashboardState, DashboardStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let state = Store::new(DashboardState::default());

    // Issue both halves independently; the store settles once both are in
    let fetch = move || {
        let Some(generation) = state.try_update(|s| s.begin()) else {
            return;
        };
        let client = ctx.client();
        let stats_client = client.clone();
        spawn_local(async move {
            let result = stats_client.dashboard_stats().await;
            state.update(|s| s.finish_stats(generation, result));
        });
        spawn_local(async move {
            let result = client.recent_tasks(RECENT_TASKS_LIMIT).await;
            state.update(|s| s.finish_recent(generation, result));
        });
    };
    fetch();

    let stats = Memo::new(move |_| state.stats().get());

    move || match state.phase().get() {
        DashboardPhase::Loading => view! {
            <div class="page dashboard">
                <div class="skeleton heading"></div>
                <div class="stat-grid">
                    {(0..4).map(|_| view! { <div class="card skeleton stat"></div> }).collect_view()}
                </div>
            </div>
        }
        .into_any(),
        DashboardPhase::Failed(message) => view! {
            <div class="page centered">
                <div class="card">
                    <div class="text-destructive">{format!("Error: {}", message)}</div>
                    <button class="btn" on:click=move |_| fetch()>"Retry"</button>
                </div>
            </div>
        }
        .into_any(),
        DashboardPhase::Ready => view! {
            <div class="page dashboard">
                <div class="page-header">
                    <h1>"Dashboard"</h1>
                    <div class="header-actions">
                        <button class="btn" on:click=move |_| ctx.navigate(Route::NewTask)>"Add Task"</button>
                        <button class="btn outline" on:click=move |_| ctx.navigate(Route::Tasks)>"View All Tasks"</button>
                    </div>
                </div>

                <div class="stat-grid">
                    <StatCard title="Total Tasks" count=Signal::derive(move || stats.get().total_tasks) />
                    <StatCard
                        title="Pending"
                        count=Signal::derive(move || stats.get().pending_tasks)
                        fraction=Signal::derive(move || stats.get().pending_fraction())
                    />
                    <StatCard
                        title="In Progress"
                        count=Signal::derive(move || stats.get().in_progress_tasks)
                        fraction=Signal::derive(move || stats.get().in_progress_fraction())
                    />
                    <StatCard
                        title="Completed"
                        count=Signal::derive(move || stats.get().completed_tasks)
                        fraction=Signal::derive(move || stats.get().completed_fraction())
                    />
                </div>

                <div class="dashboard-grid">
                    <div class="card wide">
                        <h2 class="card-title">"Recent Tasks"</h2>
                        <RecentTasks tasks=Signal::derive(move || state.recent().get()) />
                    </div>

                    <div class="card">
                        <h2 class="card-title">"Quick Actions"</h2>
                        <button class="btn block" on:click=move |_| ctx.navigate(Route::NewTask)>"Add New Task"</button>
                        <button class="btn outline block" on:click=move |_| ctx.navigate(Route::Tasks)>"View All Tasks"</button>
                        <StatusDistribution stats=stats />
                    </div>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn StatCard(
    title: &'static str,
    #[prop(into)] count: Signal<u64>,
    #[prop(optional, into)] fraction: Option<Signal<f64>>,
) -> impl IntoView {
    view! {
        <div class="card stat">
            <div class="stat-title">{title}</div>
            <div class="stat-value">{move || count.get()}</div>
            {fraction.map(|fraction| view! { <ProgressBar fraction=fraction /> })}
        </div>
    }
}

#[component]
fn RecentTasks(#[prop(into)] tasks: Signal<Vec<Task>>) -> impl IntoView {
    move || {
        let tasks = tasks.get();
        if tasks.is_empty() {
            return view! { <p class="empty">"No tasks yet"</p> }.into_any();
        }
        view! {
            <div class="recent-list">
                {tasks.into_iter().map(|task| view! {
                    <div class="recent-item">
                        <div class="recent-text">
                            <h4>{task.title.clone()}</h4>
                            <p class="muted line-clamp">{task.description_or_default().to_string()}</p>
                        </div>
                        <div class="recent-badges">
                            <StatusBadge status=task.status />
                            <PriorityBadge priority=task.priority />
                        </div>
                    </div>
                }).collect_view()}
            </div>
        }
        .into_any()
    }
}

#[component]
fn StatusDistribution(stats: Memo<DashboardStats>) -> impl IntoView {
    view! {
        <div class="distribution">
            <h4>"Status Distribution"</h4>
            <div class="distribution-row">
                <span>"Completed"</span>
                <span>{move || stats.get().completed_tasks}</span>
            </div>
            <ProgressBar fraction=Signal::derive(move || stats.get().completed_fraction()) />
            <div class="distribution-row">
                <span>"In Progress"</span>
                <span>{move || stats.get().in_progress_tasks}</span>
            </div>
            <ProgressBar fraction=Signal::derive(move || stats.get().in_progress_fraction()) />
            <div class="distribution-row">
                <span>"Pending"</span>
                <span>{move || stats.get().pending_tasks}</span>
            </div>
            <ProgressBar fraction=Signal::derive(move || stats.get().pending_fraction()) />
        </div>
    }
}
