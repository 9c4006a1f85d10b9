//! File-based board storage.
//!
//! Stores each document as a JSON file in a directory.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::repository::BoardStore;
use super::{MEMBERSHIP_KEY, PROFILE_KEY, TEAMS_KEY};
use crate::types::{Membership, Profile, Team};
use crate::BoardError;

/// File-based board storage.
///
/// Each document is stored as `{key}.json` in the configured directory:
/// `teams.json`, `profile.json`, and `user_teams.json`.
///
/// # Example
///
/// ```rust,ignore
/// use hackmate::FileBoardStore;
///
/// let store = FileBoardStore::new("/home/me/.local/share/hackmate")?;
/// ```
pub struct FileBoardStore {
    directory: PathBuf,
}

impl FileBoardStore {
    /// Creates a new file board store.
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self, BoardError> {
        let dir = directory.into();
        std::fs::create_dir_all(&dir)
            .map_err(|e| BoardError::Storage(format!("Failed to create data directory: {e}")))?;
        Ok(Self { directory: dir })
    }

    /// Returns the path for a document file.
    fn document_path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json"))
    }

    /// Reads and parses a document, treating a missing or unparsable file as
    /// absence.
    fn read_document<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, BoardError> {
        let path = self.document_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| BoardError::Storage(format!("Failed to read {key} document: {e}")))?;

        match serde_json::from_str(&content) {
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

    /// Writes a document to its file.
    fn write_document<T: Serialize>(&self, key: &str, value: &T) -> Result<(), BoardError> {
        let path = self.document_path(key);

        let content = serde_json::to_string_pretty(value)
            .map_err(|e| BoardError::Storage(format!("Failed to serialize {key} document: {e}")))?;

        std::fs::write(&path, content)
            .map_err(|e| BoardError::Storage(format!("Failed to write {key} document: {e}")))?;

        Ok(())
    }
}

impl BoardStore for FileBoardStore {
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

#[cfg(test)]
mod tests {
    use std::env;

    use chrono::Utc;
    use rand::Rng;

    use super::*;
    use crate::tag_set::TagSet;

    fn sample_team(id: &str) -> Team {
        Team {
            id: id.to_owned(),
            name: "Stored Team".to_owned(),
            description: "A team that lives on disk.".to_owned(),
            kind: "project".to_owned(),
            size: 4,
            current_size: 1,
            required_skills: TagSet::from_tags(["rust"]),
            interests: TagSet::from_tags(["tooling"]),
            contact_info: String::new(),
            creator: "Anonymous".to_owned(),
            created_at: Utc::now(),
        }
    }

    fn temp_dir() -> PathBuf {
        let suffix: String = rand::thread_rng()
            .sample_iter(rand::distributions::Alphanumeric)
            .take(8)
            .map(char::from)
            .collect();
        let dir = env::temp_dir().join(format!("hackmate_store_test_{suffix}"));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn cleanup(dir: &PathBuf) {
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_save_and_load_teams() {
        let dir = temp_dir();
        let store = FileBoardStore::new(&dir).unwrap();

        let teams = vec![sample_team("1"), sample_team("2")];
        store.save_teams(&teams).unwrap();

        let loaded = store.load_teams().unwrap().unwrap();
        assert_eq!(loaded, teams);

        cleanup(&dir);
    }

    #[test]
    fn test_load_missing_documents() {
        let dir = temp_dir();
        let store = FileBoardStore::new(&dir).unwrap();

        assert!(store.load_teams().unwrap().is_none());
        assert!(store.load_profile().unwrap().is_none());
        assert!(store.load_membership().unwrap().is_none());

        cleanup(&dir);
    }

    #[test]
    fn test_unparsable_document_is_absence() {
        let dir = temp_dir();
        let store = FileBoardStore::new(&dir).unwrap();

        std::fs::write(dir.join("teams.json"), "not json {").unwrap();
        assert!(store.load_teams().unwrap().is_none());

        cleanup(&dir);
    }

    #[test]
    fn test_profile_and_membership_roundtrip() {
        let dir = temp_dir();
        let store = FileBoardStore::new(&dir).unwrap();

        let profile = Profile {
            name: "Sam".to_owned(),
            bio: "Backend developer".to_owned(),
            skills: TagSet::from_tags(["python"]),
            interests: TagSet::from_tags(["ai"]),
        };
        store.save_profile(&profile).unwrap();
        assert_eq!(store.load_profile().unwrap().unwrap(), profile);

        let mut membership = Membership::new();
        membership.insert("1".to_owned());
        store.save_membership(&membership).unwrap();
        assert_eq!(store.load_membership().unwrap().unwrap(), membership);

        cleanup(&dir);
    }

    #[test]
    fn test_documents_are_independent_files() {
        let dir = temp_dir();
        let store = FileBoardStore::new(&dir).unwrap();

        store.save_teams(&[sample_team("1")]).unwrap();
        store.save_profile(&Profile::default()).unwrap();
        store.save_membership(&Membership::new()).unwrap();

        assert!(dir.join("teams.json").exists());
        assert!(dir.join("profile.json").exists());
        assert!(dir.join("user_teams.json").exists());

        cleanup(&dir);
    }
}
