//! Push Channel Client
//!
//! Live interview updates over a WebSocket. The channel is a
//! single-subscriber, non-restartable event sequence: opened once at mount
//! and consumed until teardown, with no reconnect.

use leptos::*;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

use super::global::{DashboardState, Interview};

/// Push messages recognized from the server. Anything else on the wire is
/// dropped.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(tag = "type")]
pub enum PushEvent {
    #[serde(rename = "SET_INTERVIEW")]
    SetInterview {
        id: u32,
        #[serde(default)]
        interview: Option<Interview>,
    },
}

/// Derive the push endpoint from the API base: same origin, ws scheme, no
/// `/api` path.
pub fn push_url(api_base: &str) -> String {
    let url = api_base
        .replace("http://", "ws://")
        .replace("https://", "wss://");
    url.trim_end_matches('/').trim_end_matches("/api").to_string()
}

/// Single-subscriber client for the live-update channel.
pub struct PushChannel {
    ws: RefCell<Option<WebSocket>>,
}

impl PushChannel {
    /// Open the channel and wire its handlers to `state`.
    pub fn connect(url: &str, state: DashboardState) -> Self {
        let ws = match WebSocket::new(url) {
            Ok(ws) => {
                setup_handlers(&ws, state);
                Some(ws)
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("push channel connection failed: {e:?}").into(),
                );
                None
            }
        };
        Self {
            ws: RefCell::new(ws),
        }
    }

    /// Close the channel. Takes the socket out of its slot, so repeated
    /// calls are no-ops and the underlying close happens exactly once.
    pub fn close(&self) {
        if let Some(ws) = self.ws.borrow_mut().take() {
            let _ = ws.close();
        }
    }
}

/// Wire the WebSocket event handlers.
fn setup_handlers(ws: &WebSocket, state: DashboardState) {
    // On open
    let state_clone = state.clone();
    let on_open = Closure::wrap(Box::new(move |_: JsValue| {
        web_sys::console::log_1(&"push channel connected".into());
        state_clone.ws_connected.set(true);
    }) as Box<dyn FnMut(JsValue)>);
    ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
    on_open.forget();

    // On message
    let state_clone = state.clone();
    let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(text) = event.data().dyn_into::<js_sys::JsString>() {
            let text: String = text.into();
            handle_message(&text, &state_clone);
        }
    }) as Box<dyn FnMut(MessageEvent)>);
    ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
    on_message.forget();

    // On close
    let state_clone = state.clone();
    let on_close = Closure::wrap(Box::new(move |event: CloseEvent| {
        web_sys::console::log_1(
            &format!(
                "push channel closed: code={}, reason={}",
                event.code(),
                event.reason()
            )
            .into(),
        );
        state_clone.ws_connected.set(false);
    }) as Box<dyn FnMut(CloseEvent)>);
    ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));
    on_close.forget();

    // On error
    let on_error = Closure::wrap(Box::new(move |e: JsValue| {
        web_sys::console::error_1(&format!("push channel error: {e:?}").into());
    }) as Box<dyn FnMut(JsValue)>);
    ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();
}

/// Apply one text frame. Malformed or differently-tagged frames are dropped;
/// a console debug line is the only trace.
fn handle_message(text: &str, state: &DashboardState) {
    match serde_json::from_str::<PushEvent>(text) {
        Ok(PushEvent::SetInterview { id, interview }) => {
            state.set_interview(id, interview);
        }
        Err(e) => {
            web_sys::console::debug_1(&format!("ignoring push frame: {e}").into());
        }
    }
}
