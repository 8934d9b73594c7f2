//! HTTP API Client
//!
//! Functions for communicating with the scheduler REST API.

use gloo_net::http::Request;
use std::collections::HashMap;

use crate::state::global::{Appointment, Day, Interviewer};

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "http://localhost:3001/api";

/// Storage key overriding the API base URL.
const API_URL_KEY: &str = "scheduler_api_url";

/// Get the API base URL from local storage or use the default.
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Joined result of the three initial requests, applied to state as one unit.
pub struct Snapshot {
    pub days: Vec<Day>,
    pub appointments: HashMap<u32, Appointment>,
    pub interviewers: HashMap<u32, Interviewer>,
}

/// Fetch the day list.
pub async fn fetch_days() -> Result<Vec<Day>, String> {
    get_json(&format!("{}/days", get_api_base())).await
}

/// Fetch the appointments map.
pub async fn fetch_appointments() -> Result<HashMap<u32, Appointment>, String> {
    get_json(&format!("{}/appointments", get_api_base())).await
}

/// Fetch the interviewers map.
pub async fn fetch_interviewers() -> Result<HashMap<u32, Interviewer>, String> {
    get_json(&format!("{}/interviewers", get_api_base())).await
}

/// Issue the three initial reads concurrently and join them all-or-nothing:
/// any failure fails the whole snapshot.
pub async fn fetch_snapshot() -> Result<Snapshot, String> {
    let (days, appointments, interviewers) =
        futures::join!(fetch_days(), fetch_appointments(), fetch_interviewers());

    Ok(Snapshot {
        days: days?,
        appointments: appointments?,
        interviewers: interviewers?,
    })
}

/// GET a JSON resource.
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {} {}", response.status(), url));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
