//! Panel Component
//!
//! A single statistic card: label on top, computed value underneath.

use leptos::*;

use crate::state::global::{DashboardState, PanelId};
use crate::state::selectors;

/// Statistic panel. Clicking it toggles dashboard focus.
#[component]
pub fn Panel(panel: PanelId) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let days = state.days;
    let appointments = state.appointments;

    let value = create_memo(move |_| {
        selectors::panel_value(panel, &days.get(), &appointments.get())
    });

    let on_select = move |_| state.select_panel(panel);

    view! {
        <section class="dashboard__panel" on:click=on_select>
            <h1 class="dashboard__panel-header">{panel.label()}</h1>
            <p class="dashboard__panel-value">{move || value.get()}</p>
        </section>
    }
}
