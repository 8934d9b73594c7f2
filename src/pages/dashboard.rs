//! Dashboard Page
//!
//! The statistics view: joins the three initial reads on mount, then renders
//! whichever panels the current focus allows.

use leptos::*;

use crate::api;
use crate::components::{Loading, Panel};
use crate::state::global::DashboardState;
use crate::state::selectors;

/// Dashboard page component.
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    // Fetch the snapshot on mount; all three responses land as one unit.
    let state_for_load = state.clone();
    create_effect(move |_| {
        let state = state_for_load.clone();
        spawn_local(async move {
            match api::fetch_snapshot().await {
                Ok(snapshot) => state.apply_snapshot(snapshot),
                Err(e) => {
                    web_sys::console::error_1(&format!("initial load failed: {}", e).into());
                    state.error.set(Some(e));
                }
            }
        });
    });

    let loading = state.loading;
    let focused = state.focused;

    view! {
        <main
            class="dashboard"
            class=("dashboard--focused", move || focused.get().is_some())
        >
            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    selectors::visible_panels(focused.get())
                        .into_iter()
                        .map(|panel| view! { <Panel panel=panel /> })
                        .collect_view()
                }
            }}
        </main>
    }
}
