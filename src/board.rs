//! The entity store: in-memory collections plus the operations that mutate
//! them.
//!
//! A [`Board`] owns the team collection, the user profile, and the membership
//! list for the lifetime of a session. Every mutating operation writes all
//! three documents back through the store before returning (write-through),
//! so a reload reproduces the session state.

use chrono::Utc;
use rand::Rng;

use crate::config::BoardConfig;
use crate::matching::{self, Recommendations, TeamQuery};
use crate::seed;
use crate::storage::BoardStore;
use crate::types::{CreateTeam, Membership, Profile, Team, ANONYMOUS_CREATOR};
use crate::validators;
use crate::BoardError;

/// Length of the random suffix appended to generated team ids.
const ID_SUFFIX_LENGTH: usize = 6;

/// Single source of truth for the session's state.
///
/// # Example
///
/// ```rust
/// use hackmate::{Board, InMemoryBoardStore};
///
/// let mut board = Board::open(InMemoryBoardStore::new()).unwrap();
///
/// // A fresh board is seeded with sample teams
/// assert_eq!(board.teams().len(), 3);
///
/// board.join_team("3").unwrap();
/// assert!(board.membership().contains("3"));
/// ```
pub struct Board<S: BoardStore> {
    store: S,
    config: BoardConfig,
    teams: Vec<Team>,
    profile: Profile,
    membership: Membership,
}

impl<S: BoardStore> Board<S> {
    /// Opens a board with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Storage` if the store cannot be read or, when
    /// seeding, written.
    pub fn open(store: S) -> Result<Self, BoardError> {
        Self::with_config(store, BoardConfig::default())
    }

    /// Opens a board with a custom configuration.
    ///
    /// Loads the three documents from the store, substituting defaults for
    /// absent or unparsable ones. When the team collection comes back absent
    /// or empty and seeding is enabled, the sample teams are installed and
    /// persisted immediately so they are not regenerated on the next open.
    pub fn with_config(store: S, config: BoardConfig) -> Result<Self, BoardError> {
        let teams = store.load_teams()?.unwrap_or_default();
        let profile = store.load_profile()?.unwrap_or_default();
        let membership = store.load_membership()?.unwrap_or_default();

        let mut board = Self {
            store,
            config,
            teams,
            profile,
            membership,
        };

        if board.teams.is_empty() && board.config.seed_when_empty {
            board.teams = seed::sample_teams();
            board.persist()?;
            log::info!(
                target: "hackmate",
                "msg=\"seeded sample teams\", count={}",
                board.teams.len()
            );
        }

        Ok(board)
    }

    /// All team listings, in publication order.
    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// The current user's profile.
    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The teams the current user has joined.
    #[must_use]
    pub fn membership(&self) -> &Membership {
        &self.membership
    }

    /// The joined teams, recomputed against the team collection.
    #[must_use]
    pub fn my_teams(&self) -> Vec<&Team> {
        self.teams
            .iter()
            .filter(|team| self.membership.contains(&team.id))
            .collect()
    }

    /// Filters the team collection by browse criteria.
    #[must_use]
    pub fn filter(&self, query: &TeamQuery) -> Vec<&Team> {
        matching::filter_teams(&self.teams, query)
    }

    /// Ranks joinable teams against the profile, up to the configured limit.
    #[must_use]
    pub fn recommendations(&self) -> Recommendations<'_> {
        matching::recommend(
            &self.teams,
            &self.profile,
            &self.membership,
            self.config.recommend_limit,
        )
    }

    /// Joins a team by id.
    ///
    /// # Errors
    ///
    /// - `BoardError::TeamNotFound` - no team has that id
    /// - `BoardError::AlreadyMember` - the user already joined it
    /// - `BoardError::TeamFull` - the team reached its target size
    /// - `BoardError::Storage` - the write-through failed
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "join_team", skip_all, err)
    )]
    pub fn join_team(&mut self, team_id: &str) -> Result<&Team, BoardError> {
        let index = self
            .teams
            .iter()
            .position(|team| team.id == team_id)
            .ok_or(BoardError::TeamNotFound)?;

        if self.membership.contains(team_id) {
            return Err(BoardError::AlreadyMember);
        }

        if self.teams[index].is_full() {
            return Err(BoardError::TeamFull);
        }

        // All checks passed: mutate in place, then mirror to storage
        self.teams[index].current_size += 1;
        self.membership.insert(team_id.to_owned());
        self.persist()?;

        let team = &self.teams[index];
        log::info!(
            target: "hackmate",
            "msg=\"joined team\", team_id={}, name=\"{}\", members={}/{}",
            team.id,
            team.name,
            team.current_size,
            team.size
        );

        Ok(team)
    }

    /// Publishes a new team listing.
    ///
    /// The creator is the input's creator if non-blank, otherwise the profile
    /// name, otherwise "Anonymous". The creator is automatically a member:
    /// the listing starts at `current_size = 1` and its id is added to the
    /// membership list in the same operation.
    ///
    /// # Errors
    ///
    /// - `BoardError::Validation` - empty name/kind, overlong name, or zero size
    /// - `BoardError::Storage` - the write-through failed
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "create_team", skip_all, err)
    )]
    pub fn create_team(&mut self, input: CreateTeam) -> Result<&Team, BoardError> {
        validators::validate_create_team(&input)?;

        let creator = input
            .creator
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| self.default_creator());

        let team = Team {
            id: generate_team_id(),
            name: input.name,
            description: input.description,
            kind: input.kind.trim().to_lowercase(),
            size: input.size,
            current_size: 1,
            required_skills: input.required_skills,
            interests: input.interests,
            contact_info: input.contact_info,
            creator,
            created_at: Utc::now(),
        };

        self.membership.insert(team.id.clone());
        self.teams.push(team);
        self.persist()?;

        let index = self.teams.len() - 1;
        let team = &self.teams[index];
        log::info!(
            target: "hackmate",
            "msg=\"team created\", team_id={}, name=\"{}\", kind=\"{}\"",
            team.id,
            team.name,
            team.kind
        );

        Ok(team)
    }

    /// Replaces the profile in full and persists it.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Storage` if the write-through failed.
    pub fn save_profile(&mut self, profile: Profile) -> Result<(), BoardError> {
        self.profile = profile;
        self.persist()
    }

    /// Mirrors all three collections to the store.
    ///
    /// The contract does not distinguish which collection changed, so a
    /// mutation is durable only once all three documents are written.
    pub fn persist(&self) -> Result<(), BoardError> {
        self.store.save_teams(&self.teams)?;
        self.store.save_profile(&self.profile)?;
        self.store.save_membership(&self.membership)?;
        Ok(())
    }

    fn default_creator(&self) -> String {
        let name = self.profile.name.trim();
        if name.is_empty() {
            ANONYMOUS_CREATOR.to_owned()
        } else {
            name.to_owned()
        }
    }
}

/// Generates an opaque team id: millisecond timestamp plus a short random
/// suffix so ids created within the same millisecond stay unique.
fn generate_team_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(rand::distributions::Alphanumeric)
        .take(ID_SUFFIX_LENGTH)
        .map(char::from)
        .collect();

    format!("{}-{}", Utc::now().timestamp_millis(), suffix)
}
