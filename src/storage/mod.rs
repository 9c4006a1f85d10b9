//! Persistence boundary for the board's three documents.
//!
//! State is stored as three independently keyed JSON documents: the team
//! collection, the user profile, and the membership list. Implementations are
//! a mirror of the in-memory state, rewritten in full on every save.

mod file_store;
mod memory_store;
mod repository;

pub use file_store::FileBoardStore;
pub use memory_store::InMemoryBoardStore;
pub use repository::BoardStore;

/// Document key for the team collection.
pub const TEAMS_KEY: &str = "teams";
/// Document key for the user profile.
pub const PROFILE_KEY: &str = "profile";
/// Document key for the membership list.
pub const MEMBERSHIP_KEY: &str = "user_teams";
