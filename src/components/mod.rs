//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod panel;

pub use loading::Loading;
pub use panel::Panel;
