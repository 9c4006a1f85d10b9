//! Local-first team matchmaking board.
//!
//! Hackmate keeps a small collection of team listings, the current user's
//! profile, and the set of teams they have joined, all persisted as JSON
//! documents through a pluggable [`BoardStore`]. On top of that it provides
//! filtering and skill-based recommendations.
//!
//! # Example
//!
//! ```rust
//! use hackmate::{Board, CreateTeam, InMemoryBoardStore, TagSet};
//!
//! let mut board = Board::open(InMemoryBoardStore::new()).unwrap();
//!
//! let id = board
//!     .create_team(CreateTeam {
//!         name: "Weekend Hackers".to_owned(),
//!         description: "Building a small game over a weekend.".to_owned(),
//!         kind: "hackathon".to_owned(),
//!         size: 4,
//!         required_skills: TagSet::from_tags(["rust", "godot"]),
//!         interests: TagSet::from_tags(["games"]),
//!         contact_info: String::new(),
//!         creator: None,
//!     })
//!     .unwrap()
//!     .id
//!     .clone();
//!
//! assert!(board.membership().contains(&id));
//! ```

pub mod board;
pub mod config;
pub mod matching;
pub mod seed;
pub mod storage;
pub mod tag_set;
pub mod types;
pub mod validators;

pub use board::Board;
pub use config::BoardConfig;
pub use matching::{filter_teams, recommend, Recommendation, Recommendations, TeamQuery};
pub use storage::{BoardStore, FileBoardStore, InMemoryBoardStore};
pub use tag_set::TagSet;
pub use types::{CreateTeam, Membership, Profile, Team};
pub use validators::ValidationError;

use std::fmt;

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardError {
    /// The referenced team id does not exist in the store.
    TeamNotFound,
    /// The current user already belongs to the team.
    AlreadyMember,
    /// The team has reached its target size.
    TeamFull,
    /// Malformed input reached the core.
    Validation(ValidationError),
    /// The underlying store failed to read or write a document.
    Storage(String),
}

impl std::error::Error for BoardError {}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TeamNotFound => write!(f, "Team not found"),
            Self::AlreadyMember => write!(f, "You are already a member of this team"),
            Self::TeamFull => write!(f, "This team is full"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(msg) => write!(f, "Storage error: {msg}"),
        }
    }
}

impl From<ValidationError> for BoardError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}
