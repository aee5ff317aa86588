//! Header Component
//!
//! App title and the theme toggle.

use leptos::prelude::*;

use crate::context::{use_app_context, use_theme};
use crate::route::Route;
use crate::state::Theme;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="app-header">
            <nav class="app-nav">
                <a
                    href="#/"
                    class="app-title"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Route::Dashboard);
                    }
                >
                    "Task Manager"
                </a>
                <ThemeToggle />
            </nav>
        </header>
    }
}

/// Light/dark toggle. Renders a same-sized placeholder until the stored
/// preference has been read after mount.
#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    // first mount only; initialize is a no-op afterwards
    Effect::new(move |_| theme.initialize());

    move || match theme.theme() {
        None => view! { <div class="theme-toggle placeholder"></div> }.into_any(),
        Some(current) => view! {
            <button class="theme-toggle" title="Toggle theme" on:click=move |_| theme.toggle()>
                {if current == Theme::Light { "☾" } else { "☀" }}
                <span class="sr-only">"Toggle theme"</span>
            </button>
        }
        .into_any(),
    }
}
