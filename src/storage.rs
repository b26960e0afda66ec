//! Browser Session Storage
//!
//! `localStorage` adapter for the session gate.

use todo_catalog_core::session::SessionStorage;
use todo_catalog_core::SessionError;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn js_error(e: JsValue) -> SessionError {
    SessionError::Storage(format!("{:?}", e))
}

fn local_storage() -> Result<web_sys::Storage, SessionError> {
    let window = web_sys::window().ok_or_else(|| SessionError::Storage("no window".into()))?;
    window
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| SessionError::Storage("localStorage disabled".into()))
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        local_storage()?.remove_item(key).map_err(js_error)
    }
}
