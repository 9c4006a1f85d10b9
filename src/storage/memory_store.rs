//! In-memory board storage.
//!
//! Suitable for tests and throwaway sessions.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::repository::BoardStore;
use super::{MEMBERSHIP_KEY, PROFILE_KEY, TEAMS_KEY};
use crate::types::{Membership, Profile, Team};
use crate::BoardError;

/// In-memory board storage.
///
/// Documents are kept as raw JSON strings in a `HashMap` protected by a
/// `RwLock`, so the store exercises the same serialization boundary as
/// [`FileBoardStore`](super::FileBoardStore).
///
/// # Note
///
/// Contents are lost when the store is dropped. For durable storage, use
/// [`FileBoardStore`](super::FileBoardStore).
#[derive(Default)]
pub struct InMemoryBoardStore {
    documents: RwLock<HashMap<String, String>>,
}

impl InMemoryBoardStore {
    /// Creates a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a raw document payload under a key, bypassing serialization.
    ///
    /// Mainly useful in tests to simulate hand-edited or corrupted documents.
    pub fn insert_raw(&self, key: &str, content: impl Into<String>) -> Result<(), BoardError> {
        self.documents
            .write()
            .map_err(|_| BoardError::Storage("Lock poisoned".to_owned()))?
            .insert(key.to_owned(), content.into());
        Ok(())
    }

    fn read_document<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, BoardError> {
        let documents = self
            .documents
            .read()
            .map_err(|_| BoardError::Storage("Lock poisoned".to_owned()))?;

        let Some(content) = documents.get(key) else {
            return Ok(None);
        };

        match serde_json::from_str(content) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                log::warn!(
                    target: "hackmate",
                    "msg=\"discarding unparsable document\", key=\"{key}\", error=\"{e}\""
                );
                Ok(None)
            }
        }
    }

    fn write_document<T: Serialize>(&self, key: &str, value: &T) -> Result<(), BoardError> {
        let content = serde_json::to_string(value)
            .map_err(|e| BoardError::Storage(format!("Failed to serialize {key} document: {e}")))?;

        self.documents
            .write()
            .map_err(|_| BoardError::Storage("Lock poisoned".to_owned()))?
            .insert(key.to_owned(), content);

        Ok(())
    }
}

impl BoardStore for InMemoryBoardStore {
    fn load_teams(&self) -> Result<Option<Vec<Team>>, BoardError> {
        self.read_document(TEAMS_KEY)
    }

    fn save_teams(&self, teams: &[Team]) -> Result<(), BoardError> {
        self.write_document(TEAMS_KEY, &teams)
    }

    fn load_profile(&self) -> Result<Option<Profile>, BoardError> {
        self.read_document(PROFILE_KEY)
    }

    fn save_profile(&self, profile: &Profile) -> Result<(), BoardError> {
        self.write_document(PROFILE_KEY, profile)
    }

    fn load_membership(&self) -> Result<Option<Membership>, BoardError> {
        self.read_document(MEMBERSHIP_KEY)
    }

    fn save_membership(&self, membership: &Membership) -> Result<(), BoardError> {
        self.write_document(MEMBERSHIP_KEY, membership)
    }
}
