//! Session Stores
//!
//! The `SessionStore` trait and the in-memory backing used by tests.

use std::cell::RefCell;

use super::Session;

/// Key of the browser-local slot holding the session
pub const SESSION_KEY: &str = "oh_user";

/// A single slot holding at most one session.
///
/// Stores never report errors: a missing or unreadable record loads as
/// `None`, and write failures are left to the backing to log.
pub trait SessionStore {
    /// Read the current session, if any
    fn load(&self) -> Option<Session>;

    /// Persist a session, replacing whatever was there
    fn save(&self, session: &Session);

    /// Remove the persisted session
    fn clear(&self);
}

/// Serialize a session into slot text
pub fn encode(session: &Session) -> String {
    // Session holds only a string and a unit enum; serialization cannot fail
    serde_json::to_string(session).unwrap_or_default()
}

/// Parse slot text. Malformed content is treated as no session.
pub fn decode(raw: &str) -> Option<Session> {
    serde_json::from_str(raw).ok()
}

/// In-memory store holding the raw slot text
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with arbitrary slot content, valid or not
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
        }
    }

    /// Current slot text
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<Session> {
        self.slot.borrow().as_deref().and_then(decode)
    }

    fn save(&self, session: &Session) {
        *self.slot.borrow_mut() = Some(encode(session));
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    #[test]
    fn test_save_then_load_round_trips() {
        let store = MemoryStore::new();
        let session = Session::new("Asha", Role::Authority);

        store.save(&session);

        assert_eq!(store.load(), Some(session));
    }

    #[test]
    fn test_load_empty_is_absent() {
        assert_eq!(MemoryStore::new().load(), None);
    }

    #[test]
    fn test_clear_removes_session() {
        let store = MemoryStore::new();
        store.save(&Session::new("Asha", Role::Local));

        store.clear();

        assert_eq!(store.load(), None);
        assert_eq!(store.raw(), None);
    }

    #[test]
    fn test_save_overwrites_previous() {
        let store = MemoryStore::new();
        store.save(&Session::new("first", Role::Local));
        store.save(&Session::new("second", Role::Authority));

        assert_eq!(store.load(), Some(Session::new("second", Role::Authority)));
    }

    #[test]
    fn test_malformed_slot_loads_as_absent() {
        for raw in ["", "not json", "{\"name\": \"x\"}", "{\"name\": \"x\", \"role\": \"admin\"}", "null"] {
            assert_eq!(MemoryStore::with_raw(raw).load(), None, "slot: {raw}");
        }
    }

    #[test]
    fn test_slot_format() {
        let raw = encode(&Session::new("Asha", Role::Local));
        assert_eq!(raw, r#"{"name":"Asha","role":"local"}"#);
    }

    #[test]
    fn test_decode_accepts_type_field() {
        let session = decode(r#"{"name":"Ravi","type":"authority"}"#);
        assert_eq!(session, Some(Session::new("Ravi", Role::Authority)));
    }

    #[test]
    fn test_decode_prefers_role_over_type() {
        let session = decode(r#"{"name":"Ravi","role":"local","type":"authority"}"#);
        assert_eq!(session, Some(Session::new("Ravi", Role::Local)));

        let session = decode(r#"{"type":"authority","name":"Ravi","role":"authority"}"#);
        assert_eq!(session, Some(Session::new("Ravi", Role::Authority)));
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let session = decode(r#"{"name":"Ravi","role":"local","theme":"dark"}"#);
        assert_eq!(session, Some(Session::new("Ravi", Role::Local)));
    }
}
