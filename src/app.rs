//! Task Dashboard App
//!
//! Root component: provides context and switches views on the hash route.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::browser;
use crate::components::{DashboardPage, Header, TaskFormPage, TasksPage};
use crate::config::ApiConfig;
use crate::context::{AppContext, ThemeContext};
use crate::route::Route;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    tracing::info!(base_url = %config.base_url, "task collaborator configured");

    // State
    let (route, set_route) = signal(Route::from_hash(&browser::current_hash()));
    let ctx = AppContext::new((route, set_route), ApiClient::new(config));

    // Provide context to all children
    provide_context(ctx);
    provide_context(ThemeContext::new());

    // Back/forward and hand-edited URLs
    let _ = window_event_listener(leptos::ev::hashchange, move |_| ctx.sync_from_hash());

    view! {
        <div class="app-layout">
            <Header />
            <main class="main-content">
                {move || match route.get() {
                    Route::Dashboard => view! { <DashboardPage /> }.into_any(),
                    Route::Tasks => view! { <TasksPage /> }.into_any(),
                    Route::NewTask => view! { <TaskFormPage task_id=None /> }.into_any(),
                    Route::EditTask(id) => view! { <TaskFormPage task_id=Some(id) /> }.into_any(),
                }}
            </main>
        </div>
    }
}
