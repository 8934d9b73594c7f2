//! Loading Component
//!
//! Shown until the initial snapshot has been applied.

use leptos::*;

use crate::state::global::DashboardState;

/// Full-page loading spinner. If the snapshot fetch failed, the failure is
/// spelled out under the spinner; the dashboard stays in this state.
#[component]
pub fn Loading() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let error = state.error;

    view! {
        <div class="loading">
            <div class="loading-spinner" />
            {move || {
                error
                    .get()
                    .map(|message| view! { <p class="loading__error">{message}</p> })
            }}
        </div>
    }
}
