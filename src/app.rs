//! App Root Component
//!
//! Wires global state, the push channel lifecycle, and the page chrome.

use leptos::*;
use std::rc::Rc;

use crate::api;
use crate::pages::Dashboard;
use crate::state::global::{provide_dashboard_state, DashboardState};
use crate::state::preferences::LocalStoragePrefs;
use crate::state::websocket::{push_url, PushChannel};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_dashboard_state(Rc::new(LocalStoragePrefs));

    let state = use_context::<DashboardState>().expect("DashboardState not found");

    // Restore the persisted focus; independent of the snapshot fetch.
    state.restore_focus();

    // The push channel lives exactly as long as the app and is closed once
    // on unmount.
    let channel = PushChannel::connect(&push_url(&api::get_api_base()), state.clone());
    on_cleanup(move || channel.close());

    view! {
        <div class="app">
            <Dashboard />
            <Footer />
        </div>
    }
}

/// Footer showing push-channel status and the last live update.
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let ws_connected = state.ws_connected;
    let last_update = state.last_update;

    view! {
        <footer class="footer">
            {move || {
                if ws_connected.get() {
                    view! {
                        <span class="footer__status footer__status--live">
                            <span class="status-dot status-dot--live" />
                            " Live updates"
                        </span>
                    }
                    .into_view()
                } else {
                    view! {
                        <span class="footer__status">
                            <span class="status-dot" />
                            " Offline"
                        </span>
                    }
                    .into_view()
                }
            }}

            <span class="footer__sync">
                {move || {
                    last_update
                        .get()
                        .and_then(|ts| chrono::DateTime::from_timestamp_millis(ts))
                        .map(|dt| format!("Last update: {}", dt.format("%H:%M:%S")))
                        .unwrap_or_else(|| "No live updates yet".to_string())
                }}
            </span>
        </footer>
    }
}
