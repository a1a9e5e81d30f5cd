//! Session Management
//!
//! The signed-in user record and the stores that persist it.
//!
//! A session is nothing more than a display name and an account role. It is
//! created on login or signup, read whenever a view renders, and removed on
//! logout. There is no expiry and no signing: the record lives in a single
//! browser-local slot.

pub mod browser;
pub mod store;

pub use browser::BrowserStore;
pub use store::{decode, encode, MemoryStore, SessionStore, SESSION_KEY};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account type chosen at login or signup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Citizen reporter
    #[default]
    Local,
    /// Official with dashboard access
    Authority,
}

impl Role {
    /// All roles, in the order the account-type selector shows them
    pub const ALL: [Role; 2] = [Role::Local, Role::Authority];

    /// Wire name, as stored in the session slot
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Local => "local",
            Role::Authority => "authority",
        }
    }

    /// Button label for the account-type selector
    pub fn label(&self) -> &'static str {
        match self {
            Role::Local => "Local",
            Role::Authority => "Authority",
        }
    }

    /// Display name used when the form's name field is left blank
    pub fn fallback_name(&self) -> &'static str {
        match self {
            Role::Local => "LocalUser",
            Role::Authority => "AuthorityUser",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The persisted record identifying the current user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SlotRecord")]
pub struct Session {
    pub name: String,
    pub role: Role,
}

/// Slot contents as read. Older slots name the role `type`; when both keys
/// are present, `role` wins.
#[derive(Deserialize)]
struct SlotRecord {
    name: String,
    role: Option<Role>,
    #[serde(rename = "type")]
    legacy_role: Option<Role>,
}

impl TryFrom<SlotRecord> for Session {
    type Error = &'static str;

    fn try_from(record: SlotRecord) -> Result<Self, Self::Error> {
        let role = record
            .role
            .or(record.legacy_role)
            .ok_or("missing field `role`")?;
        Ok(Session::new(record.name, role))
    }
}

impl Session {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    /// Build the record written when a login or signup form is submitted.
    ///
    /// Any input is accepted and kept verbatim. Only an empty name is
    /// replaced by the role's fallback name.
    pub fn sign_in(name: &str, role: Role) -> Self {
        if name.is_empty() {
            Self::new(role.fallback_name(), role)
        } else {
            Self::new(name, role)
        }
    }

    /// Nav bar badge, e.g. `Asha (local)`
    pub fn badge(&self) -> String {
        format!("{} ({})", self.name, self.role)
    }
}
