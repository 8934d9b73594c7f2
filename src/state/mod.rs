//! State Management
//!
//! Global dashboard state, the pure reducers and selectors it is driven by,
//! the persisted focus preference, and the push-channel client.

pub mod global;
pub mod preferences;
pub mod reducers;
pub mod selectors;
pub mod websocket;

pub use global::{provide_dashboard_state, DashboardState, PanelId};
