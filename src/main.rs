//! Interview Scheduler Dashboard
//!
//! Aggregate interview statistics, rendered in the browser.
//!
//! # Features
//!
//! - Initial snapshot fetched from the scheduler API
//! - Live interview updates over a WebSocket push channel
//! - Click a panel to focus it; focus survives reloads
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It merges the joined HTTP snapshot with a persisted focus
//! preference and a stream of push-channel events, all into one view model.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
