//! Core types for the matchmaking board.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::tag_set::TagSet;

/// Creator name used when neither the input nor the profile provides one.
pub const ANONYMOUS_CREATOR: &str = "Anonymous";

/// A team listing seeking collaborators.
///
/// Serialized with the camelCase keys of the persisted document layout
/// (`currentSize`, `requiredSkills`, `contactInfo`, `createdAt`, `type`).
/// Deserialization validates the size invariant, so a document violating it
/// fails to parse and the load boundary treats it as absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Opaque unique identifier, generated at creation.
    pub id: String,
    /// Human-readable team name.
    pub name: String,
    /// What the team is building and who it is looking for.
    pub description: String,
    /// Listing kind: "hackathon", "project", "startup", or any other
    /// lowercase label. Open enumeration, stored as a string.
    #[serde(rename = "type")]
    pub kind: String,
    /// Target team size. Always positive.
    pub size: u32,
    /// Current member count. Invariant: `1 <= current_size <= size`.
    pub current_size: u32,
    /// Skills the team is looking for.
    pub required_skills: TagSet,
    /// Topics the team cares about.
    pub interests: TagSet,
    /// How to reach the team. Empty when not provided.
    #[serde(default)]
    pub contact_info: String,
    /// Display name of whoever published the listing.
    pub creator: String,
    /// When the listing was published.
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Returns true when the team has reached its target size.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.current_size >= self.size
    }
}

impl<'de> Deserialize<'de> for Team {
    /// Deserializes the persisted layout and rejects documents where
    /// `1 <= currentSize <= size` does not hold.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct TeamDoc {
            id: String,
            name: String,
            description: String,
            #[serde(rename = "type")]
            kind: String,
            size: u32,
            current_size: u32,
            required_skills: TagSet,
            interests: TagSet,
            #[serde(default)]
            contact_info: String,
            creator: String,
            created_at: DateTime<Utc>,
        }

        let doc = TeamDoc::deserialize(deserializer)?;

        if doc.current_size < 1 || doc.current_size > doc.size {
            return Err(serde::de::Error::custom(format!(
                "team \"{}\": currentSize {} outside 1..={}",
                doc.id, doc.current_size, doc.size
            )));
        }

        Ok(Self {
            id: doc.id,
            name: doc.name,
            description: doc.description,
            kind: doc.kind,
            size: doc.size,
            current_size: doc.current_size,
            required_skills: doc.required_skills,
            interests: doc.interests,
            contact_info: doc.contact_info,
            creator: doc.creator,
            created_at: doc.created_at,
        })
    }
}

/// The current user's self-description, used to drive recommendations.
///
/// A session starts with the empty default and the whole record is replaced
/// on each save, never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub bio: String,
    pub skills: TagSet,
    pub interests: TagSet,
}

/// The set of team ids the current user has joined.
///
/// Insertion-ordered and duplicate-free. Grows via join and create; teams are
/// never left in this scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Membership {
    team_ids: Vec<String>,
}

impl<'de> Deserialize<'de> for Membership {
    /// Deserializes through [`Membership::insert`], dropping duplicate ids a
    /// hand-edited document may carry.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ids = Vec::<String>::deserialize(deserializer)?;

        let mut membership = Self::new();
        for id in ids {
            membership.insert(id);
        }

        Ok(membership)
    }
}

impl Membership {
    /// Creates an empty membership.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the user belongs to the team.
    #[must_use]
    pub fn contains(&self, team_id: &str) -> bool {
        self.team_ids.iter().any(|id| id == team_id)
    }

    /// Records a joined team. Returns false if already present.
    pub fn insert(&mut self, team_id: String) -> bool {
        if self.contains(&team_id) {
            return false;
        }
        self.team_ids.push(team_id);
        true
    }

    /// Iterates over the joined team ids in join order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.team_ids.iter().map(String::as_str)
    }

    /// Returns the number of joined teams.
    #[must_use]
    pub fn len(&self) -> usize {
        self.team_ids.len()
    }

    /// Returns true if no teams have been joined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.team_ids.is_empty()
    }
}

/// Input for publishing a new team listing.
///
/// The form layer is expected to validate before calling the core, but the
/// core re-checks name, kind, and size rather than corrupt state.
#[derive(Debug, Clone)]
pub struct CreateTeam {
    pub name: String,
    pub description: String,
    pub kind: String,
    /// Target size, must be positive.
    pub size: u32,
    pub required_skills: TagSet,
    pub interests: TagSet,
    pub contact_info: String,
    /// Blank or absent falls back to the profile name, then "Anonymous".
    pub creator: Option<String>,
}
