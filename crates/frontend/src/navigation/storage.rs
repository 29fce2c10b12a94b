//! localStorage adapter for the navigation selection.
//!
//! Writes are best-effort: a failure is logged and swallowed, the in-memory
//! state stays authoritative for the rest of the session.

use contracts::navigation::NavigationState;
use web_sys::window;

const NAVIGATION_STORAGE_KEY: &str = "navigationState";

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the persisted selection, or the default when absent or unreadable.
///
/// Stored records bypass the setter cascade, so they are normalized before
/// entering the store; a record written by an older version cannot resurrect
/// a combination the setters would never produce.
pub fn load() -> NavigationState {
    let storage = match local_storage() {
        Some(s) => s,
        None => return NavigationState::default(),
    };
    match storage.get_item(NAVIGATION_STORAGE_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<NavigationState>(&raw) {
            Ok(stored) => stored.normalized(),
            Err(err) => {
                log::error!("discarding unreadable navigation record: {err}");
                NavigationState::default()
            }
        },
        _ => NavigationState::default(),
    }
}

/// Persist the full selection under the fixed key.
pub fn save(state: &NavigationState) {
    let storage = match local_storage() {
        Some(s) => s,
        None => return,
    };
    match serde_json::to_string(state) {
        Ok(json) => {
            if let Err(err) = storage.set_item(NAVIGATION_STORAGE_KEY, &json) {
                log::warn!("failed to persist navigation state: {err:?}");
            }
        }
        Err(err) => log::warn!("failed to serialize navigation state: {err}"),
    }
}
