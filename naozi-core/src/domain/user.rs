//! User and session domain models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A registered customer as the backend reports it.
///
/// Only `id` and `name` carry meaning client-side; everything else the
/// backend sends is preserved untouched so re-serializing the record does
/// not silently drop fields the sheet may have grown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            extra: Map::new(),
        }
    }
}

/// The pairing of a user record and an auth token representing "logged in".
///
/// Both present or both absent in normal operation; the pairing is
/// best-effort only and a partial write is tolerated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<UserRecord>,
    pub token: Option<String>,
}

impl Session {
    pub fn logged_out() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }
}
