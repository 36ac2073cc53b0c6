//! `localStorage` access that reports failures instead of throwing.
//!
//! Storage can be disabled (private mode, blocked cookies), so every call
//! returns a `Result` the caller is expected to log and move past.

use web_sys::Storage;

fn local_storage() -> Result<Storage, String> {
    crate::dom::window()?
        .local_storage()
        .map_err(|e| format!("Storage error: {:?}", e))?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

/// Reads `key`; `Ok(None)` when nothing is stored.
pub fn get(key: &str) -> Result<Option<String>, String> {
    local_storage()?
        .get_item(key)
        .map_err(|e| format!("Storage read error: {:?}", e))
}

/// Writes `value` under `key`.
pub fn set(key: &str, value: &str) -> Result<(), String> {
    local_storage()?
        .set_item(key, value)
        .map_err(|e| format!("Storage write error: {:?}", e))
}
