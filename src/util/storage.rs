//! Browser localStorage access for persisted client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists through these helpers so it survives reloads.
//! All access is hydrate-only and best-effort: storage failures (quota,
//! disabled storage, private browsing) degrade to "nothing persisted"
//! rather than erroring, and SSR paths no-op so server rendering stays
//! deterministic.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Load and decode the JSON value stored under `key`, if any.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Encode `value` as JSON and store it under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let (Some(storage), Ok(raw)) = (local_storage(), serde_json::to_string(value)) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}
