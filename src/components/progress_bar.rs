//! Progress Bar Component

use leptos::prelude::*;

/// Horizontal bar filled to `fraction` (0.0..=1.0)
#[component]
pub fn ProgressBar(#[prop(into)] fraction: Signal<f64>) -> impl IntoView {
    let width = move || format!("{:.1}%", fraction.get().clamp(0.0, 1.0) * 100.0);
    view! {
        <div class="progress">
            <div class="progress-fill" style:width=width></div>
        </div>
    }
}
