//! localStorage round-trip for the filter state.
//!
//! Persistence is a convenience, not a correctness requirement: every
//! storage failure is swallowed (logged at debug) and `load` always hands
//! back a usable state.

use super::state::{state_from_json, FilterState};

/// Storage key for the main factories listing.
pub const FACTORY_FILTERS_KEY: &str = "factory_finder_filters";
/// Storage key for the franchise listing, kept separate so the two pages
/// do not clobber each other's selections.
pub const FRANCHISE_FILTERS_KEY: &str = "franchise_factory_finder_filters";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Persist the full state under `key`, overwriting any prior value.
pub fn save(key: &str, state: &FilterState) {
    let Ok(json) = serde_json::to_string(state) else {
        return;
    };
    if let Some(storage) = local_storage() {
        if storage.set_item(key, &json).is_err() {
            log::debug!("could not persist filters under {key:?}");
        }
    }
}

/// Load the persisted state under `key`. Absent or corrupted values
/// degrade per field to "no selection".
pub fn load(key: &str) -> FilterState {
    let Some(raw) = local_storage().and_then(|s| s.get_item(key).ok().flatten()) else {
        return FilterState::default();
    };
    state_from_json(&raw)
}

/// Remove the persisted state under `key`.
pub fn clear(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}
