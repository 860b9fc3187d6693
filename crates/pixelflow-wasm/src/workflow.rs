//! Workflow persistence bindings backed by browser localStorage.
//!
//! The browser build implements the core [`WorkflowStore`] contract on top
//! of `window.localStorage`, so the same save/load helpers work against an
//! in-memory store natively and against the browser store in the editor.

use pixelflow_core::workflow::{WorkflowError, WorkflowStore, DEFAULT_WORKFLOW_KEY};
use wasm_bindgen::prelude::*;

/// Key-value store over `window.localStorage`.
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    /// Open the window's localStorage.
    ///
    /// Fails outside a browsing context (no window) or when storage access
    /// is denied.
    pub fn open() -> Result<Self, WorkflowError> {
        let window =
            web_sys::window().ok_or_else(|| WorkflowError::Storage("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|_| WorkflowError::Storage("localStorage access denied".to_string()))?
            .ok_or_else(|| WorkflowError::Storage("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl WorkflowStore for LocalStorageStore {
    fn put(&mut self, key: &str, value: &str) -> Result<(), WorkflowError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| WorkflowError::Storage(format!("localStorage write failed for {key}")))
    }

    fn get(&self, key: &str) -> Result<Option<String>, WorkflowError> {
        self.storage
            .get_item(key)
            .map_err(|_| WorkflowError::Storage(format!("localStorage read failed for {key}")))
    }
}

/// Save the editor's workflow object under the default key.
///
/// The value is stringified as JSON and stored as-is; the shape is the
/// caller's choice and no schema is enforced.
///
/// # Example (TypeScript)
///
/// ```typescript
/// save_workflow({nodes: [...], edges: [...]});
/// ```
#[wasm_bindgen]
pub fn save_workflow(value: JsValue) -> Result<(), JsValue> {
    let json = js_sys::JSON::stringify(&value)
        .map_err(|_| JsValue::from_str("workflow is not JSON-serializable"))?;
    let json: String = json
        .as_string()
        .ok_or_else(|| JsValue::from_str("workflow is not JSON-serializable"))?;

    let mut store = LocalStorageStore::open().map_err(to_js_error)?;
    store
        .put(DEFAULT_WORKFLOW_KEY, &json)
        .map_err(to_js_error)
}

/// Load the workflow object stored under the default key.
///
/// Returns `null` when nothing has been saved yet.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const workflow = load_workflow();
/// if (workflow !== null) { restore(workflow); }
/// ```
#[wasm_bindgen]
pub fn load_workflow() -> Result<JsValue, JsValue> {
    let store = LocalStorageStore::open().map_err(to_js_error)?;
    match store.get(DEFAULT_WORKFLOW_KEY).map_err(to_js_error)? {
        Some(json) => js_sys::JSON::parse(&json)
            .map_err(|_| JsValue::from_str("stored workflow is not valid JSON")),
        None => Ok(JsValue::NULL),
    }
}

fn to_js_error(err: WorkflowError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
