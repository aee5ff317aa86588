//! Delete Confirm Dialog
//!
//! Modal confirmation for the list's pending delete candidate.

use leptos::prelude::*;

/// Shown while `task_title` is `Some`
///
/// # Arguments
/// * `task_title` - Title of the held candidate, `None` hides the dialog
/// * `busy` - Delete request in flight; both buttons disabled
/// * `on_confirm` / `on_cancel` - Dialog actions
#[component]
pub fn DeleteConfirmDialog(
    #[prop(into)] task_title: Signal<Option<String>>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || task_title.with(Option::is_some)>
            <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <h2 class="dialog-title">"Are you absolutely sure?"</h2>
                    <p class="dialog-description">
                        {move || format!(
                            "This action cannot be undone. This will permanently delete the task: \"{}\".",
                            task_title.get().unwrap_or_default(),
                        )}
                    </p>
                    <div class="dialog-footer">
                        <button class="btn outline" disabled=move || busy.get() on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn destructive" disabled=move || busy.get() on:click=move |_| on_confirm.run(())>
                            "Continue"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
