//! Persisted Preferences
//!
//! The focused-panel preference survives across visits. Storage access goes
//! through a trait so the browser backend can be swapped for an in-memory
//! one in tests.

use super::global::PanelId;

/// Storage key for the focused panel.
const FOCUSED_KEY: &str = "focused";

/// Side channel for the persisted focus value. Read once at startup, written
/// on every focus transition.
pub trait PreferenceStore {
    /// Read the stored focus, if any.
    fn load_focus(&self) -> Option<PanelId>;

    /// Write the focus; `None` clears it.
    fn store_focus(&self, focused: Option<PanelId>);
}

/// JSON-encode the focus the way the key is stored: a bare id or `null`.
fn encode_focus(focused: Option<PanelId>) -> String {
    match focused {
        Some(panel) => panel.id().to_string(),
        None => "null".to_string(),
    }
}

/// Decode a stored focus value. Anything unreadable, `null` included, is
/// treated as absent.
fn decode_focus(raw: &str) -> Option<PanelId> {
    serde_json::from_str::<u8>(raw)
        .ok()
        .and_then(PanelId::from_id)
}

/// Browser localStorage backend.
pub struct LocalStoragePrefs;

impl LocalStoragePrefs {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalStoragePrefs {
    fn load_focus(&self) -> Option<PanelId> {
        let raw = Self::storage()?.get_item(FOCUSED_KEY).ok().flatten()?;
        decode_focus(&raw)
    }

    fn store_focus(&self, focused: Option<PanelId>) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(FOCUSED_KEY, &encode_focus(focused));
        }
    }
}

/// In-memory backend for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryPrefs {
    focused: std::cell::RefCell<Option<PanelId>>,
}

#[cfg(test)]
impl PreferenceStore for MemoryPrefs {
    fn load_focus(&self) -> Option<PanelId> {
        *self.focused.borrow()
    }

    fn store_focus(&self, focused: Option<PanelId>) {
        *self.focused.borrow_mut() = focused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_ids_and_null() {
        assert_eq!(encode_focus(Some(PanelId::TotalInterviews)), "1");
        assert_eq!(encode_focus(Some(PanelId::InterviewsPerDay)), "4");
        assert_eq!(encode_focus(None), "null");
    }

    #[test]
    fn decodes_stored_ids() {
        assert_eq!(decode_focus("3"), Some(PanelId::MostPopularDay));
        for panel in PanelId::ALL {
            assert_eq!(decode_focus(&encode_focus(Some(panel))), Some(panel));
        }
    }

    #[test]
    fn unreadable_values_mean_unfocused() {
        assert_eq!(decode_focus("null"), None);
        assert_eq!(decode_focus(""), None);
        assert_eq!(decode_focus("banana"), None);
        assert_eq!(decode_focus("9"), None);
        assert_eq!(decode_focus("{\"id\":2}"), None);
    }

    #[test]
    fn memory_store_round_trips() {
        let prefs = MemoryPrefs::default();
        assert_eq!(prefs.load_focus(), None);

        prefs.store_focus(Some(PanelId::LeastPopularTimeSlot));
        assert_eq!(prefs.load_focus(), Some(PanelId::LeastPopularTimeSlot));

        prefs.store_focus(None);
        assert_eq!(prefs.load_focus(), None);
    }
}
