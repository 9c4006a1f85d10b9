use crate::types::{Membership, Profile, Team};
use crate::BoardError;

/// Storage backend for the board's three documents.
///
/// Each `load_*` method returns `Ok(None)` both when the document is absent
/// and when it exists but cannot be parsed; unparsable or invalid local data
/// (team documents violating the size invariant fail deserialization) is
/// treated as absence so the board can fall back to defaults instead of
/// failing to start. Only I/O failures surface as `Err(BoardError::Storage)`.
pub trait BoardStore {
    /// Loads the team collection.
    fn load_teams(&self) -> Result<Option<Vec<Team>>, BoardError>;

    /// Replaces the stored team collection.
    fn save_teams(&self, teams: &[Team]) -> Result<(), BoardError>;

    /// Loads the user profile.
    fn load_profile(&self) -> Result<Option<Profile>, BoardError>;

    /// Replaces the stored profile.
    fn save_profile(&self, profile: &Profile) -> Result<(), BoardError>;

    /// Loads the membership list.
    fn load_membership(&self) -> Result<Option<Membership>, BoardError>;

    /// Replaces the stored membership list.
    fn save_membership(&self, membership: &Membership) -> Result<(), BoardError>;
}
