//! Persisted session storage
//!
//! The session lives as two independent entries in the Naozi directory:
//! `naozi_user` holds the JSON-encoded user record and `naozi_token` holds
//! the raw token string. Both absent means logged out. The pairing is
//! best-effort: a failure between the two writes can leave them
//! inconsistent, which this domain tolerates.

use std::path::{Path, PathBuf};

use crate::domain::result::Result;
use crate::domain::{Session, UserRecord};

const USER_KEY: &str = "naozi_user";
const TOKEN_KEY: &str = "naozi_token";

/// File-backed key/value store for the current session
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_KEY)
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_KEY)
    }

    /// Load the persisted session. Missing or corrupt entries read as
    /// absent rather than failing; a half-written session degrades to
    /// logged-out instead of wedging the client.
    pub fn load(&self) -> Session {
        let user = std::fs::read_to_string(self.user_path())
            .ok()
            .and_then(|content| serde_json::from_str::<UserRecord>(&content).ok());

        let token = std::fs::read_to_string(self.token_path())
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Session { user, token }
    }

    /// Persist a session. Writes the user record first, then the token.
    pub fn save(&self, user: &UserRecord, token: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string(user)?;
        std::fs::write(self.user_path(), content)?;
        std::fs::write(self.token_path(), token)?;
        Ok(())
    }

    /// Remove both entries. Already-absent entries are fine.
    pub fn clear(&self) -> Result<()> {
        for path in [self.user_path(), self.token_path()] {
            match std::fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
