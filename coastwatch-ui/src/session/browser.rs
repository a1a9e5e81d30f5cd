//! Browser Session Store
//!
//! `SessionStore` backed by `window.localStorage`.

use wasm_bindgen::JsValue;

use super::store::{decode, encode, SessionStore, SESSION_KEY};
use super::Session;

/// Session slot in the browser's local storage
#[derive(Clone, Debug)]
pub struct BrowserStore {
    key: String,
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self::new(SESSION_KEY)
    }
}

impl BrowserStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for BrowserStore {
    fn load(&self) -> Option<Session> {
        let raw = Self::storage()?.get_item(&self.key).ok().flatten()?;
        decode(&raw)
    }

    fn save(&self, session: &Session) {
        let Some(storage) = Self::storage() else {
            warn("local storage unavailable, session not saved");
            return;
        };
        if let Err(e) = storage.set_item(&self.key, &encode(session)) {
            warn(&format!("Failed to save session: {}", describe(&e)));
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(&self.key) {
                warn(&format!("Failed to clear session: {}", describe(&e)));
            }
        }
    }
}

fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
