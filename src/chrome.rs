//! Chrome Extension API Bindings
//!
//! Frontend bindings to the host browser's `chrome.*` APIs. Every extern is
//! declared with `catch` because the popup may also run outside an extension
//! context (plain-browser dev), where the `chrome` namespace does not exist.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Single storage key holding the enabled-card name list
pub const ENABLED_CARDS_KEY: &str = "enabled_cards";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "sync"], js_name = get)]
    async fn storage_sync_get(keys: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "sync"], js_name = set)]
    async fn storage_sync_set(items: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = query)]
    async fn tabs_query(query_info: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Deserialize)]
struct StoredSelection {
    #[serde(default)]
    enabled_cards: Option<Vec<String>>,
}

#[derive(Serialize)]
struct SelectionItems<'a> {
    enabled_cards: &'a [String],
}

#[derive(Serialize)]
struct TabQuery {
    active: bool,
    #[serde(rename = "currentWindow")]
    current_window: bool,
}

#[derive(Deserialize)]
struct TabInfo {
    #[serde(default)]
    url: Option<String>,
}

/// Read the persisted card selection.
///
/// `Ok(None)` means the key was never written; `Err` means the storage
/// provider is unavailable (callers degrade to in-memory state).
pub async fn read_enabled_cards() -> Result<Option<Vec<String>>, String> {
    let keys = serde_wasm_bindgen::to_value(&[ENABLED_CARDS_KEY]).map_err(|e| e.to_string())?;
    let result = storage_sync_get(keys).await.map_err(|e| format!("{:?}", e))?;
    let stored: StoredSelection =
        serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())?;
    Ok(stored.enabled_cards)
}

/// Overwrite the persisted card selection (single-key whole-value write)
pub async fn write_enabled_cards(names: &[String]) -> Result<(), String> {
    let items = serde_wasm_bindgen::to_value(&SelectionItems { enabled_cards: names })
        .map_err(|e| e.to_string())?;
    storage_sync_set(items).await.map_err(|e| format!("{:?}", e))?;
    Ok(())
}

/// URL of the active tab, or empty string when no page is detected.
///
/// Empty is the "no active page" signal the submit validation keys on, so
/// any query failure (including a missing `chrome` namespace) ends up here
/// as empty rather than some substitute URL.
pub async fn active_tab_url() -> String {
    let query = TabQuery { active: true, current_window: true };
    let Ok(query) = serde_wasm_bindgen::to_value(&query) else {
        return String::new();
    };
    let Ok(result) = tabs_query(query).await else {
        return String::new();
    };
    match serde_wasm_bindgen::from_value::<Vec<TabInfo>>(result) {
        Ok(tabs) => first_tab_url(tabs),
        Err(_) => String::new(),
    }
}

/// URL of the first matched tab; empty when there is none or it has no URL
fn first_tab_url(tabs: Vec<TabInfo>) -> String {
    tabs.into_iter()
        .next()
        .and_then(|tab| tab.url)
        .unwrap_or_default()
}
