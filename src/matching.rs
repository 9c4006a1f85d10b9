//! Stateless filtering and recommendation scoring over the team collection.
//!
//! These functions never mutate state; the [`Board`](crate::Board) exposes
//! thin wrappers over them bound to its current collections.

use crate::types::{Membership, Profile, Team};
use crate::TagSet;

/// Points awarded per required skill matched by the profile.
const SKILL_WEIGHT: u32 = 10;
/// Points awarded per team interest matched by the profile.
const INTEREST_WEIGHT: u32 = 5;

/// Browse criteria for the team list.
///
/// Each criterion is optional; absent or blank criteria do not constrain.
/// Criteria combine with logical AND.
#[derive(Debug, Clone, Default)]
pub struct TeamQuery {
    /// Free-text search across name, description, and required skills
    /// (case-insensitive substring).
    pub search: Option<String>,
    /// Required skill (case-insensitive exact match).
    pub skill: Option<String>,
    /// Team kind (case-insensitive exact match).
    pub kind: Option<String>,
}

impl TeamQuery {
    /// Returns true if no criterion constrains the result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        fn blank(criterion: &Option<String>) -> bool {
            criterion.as_deref().is_none_or(|s| s.trim().is_empty())
        }
        blank(&self.search) && blank(&self.skill) && blank(&self.kind)
    }
}

/// Filters teams by the query, preserving input order.
#[must_use]
pub fn filter_teams<'a>(teams: &'a [Team], query: &TeamQuery) -> Vec<&'a Team> {
    let search = normalized(&query.search);
    let skill = normalized(&query.skill);
    let kind = normalized(&query.kind);

    teams
        .iter()
        .filter(|team| {
            let matches_search = search.as_deref().is_none_or(|term| {
                team.name.to_lowercase().contains(term)
                    || team.description.to_lowercase().contains(term)
                    || team.required_skills.any_contains(term)
            });

            let matches_skill = skill
                .as_deref()
                .is_none_or(|s| team.required_skills.contains(s));

            let matches_kind = kind
                .as_deref()
                .is_none_or(|k| team.kind.to_lowercase() == *k);

            matches_search && matches_skill && matches_kind
        })
        .collect()
}

fn normalized(criterion: &Option<String>) -> Option<String> {
    criterion
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

/// A recommended team together with why it was recommended.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation<'a> {
    pub team: &'a Team,
    /// `10` per matched required skill plus `5` per matched interest.
    pub score: u32,
    /// Required skills of the team that the profile has.
    pub matched_skills: TagSet,
    /// Interests of the team shared with the profile.
    pub matched_interests: TagSet,
}

/// Recommendation outcome.
///
/// `NoSignal` (the profile lists no skills) is distinct from a ranking that
/// came back empty, so callers can show different empty states.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendations<'a> {
    /// The profile has no skills, so no ranking was computed.
    NoSignal,
    /// Scored and ranked candidates, best first. May be empty.
    Ranked(Vec<Recommendation<'a>>),
}

impl<'a> Recommendations<'a> {
    /// Returns the ranked list, treating `NoSignal` as empty.
    #[must_use]
    pub fn as_slice(&self) -> &[Recommendation<'a>] {
        match self {
            Self::NoSignal => &[],
            Self::Ranked(items) => items,
        }
    }
}

/// Ranks joinable teams against the profile.
///
/// Teams the user already belongs to and teams at capacity are excluded
/// before scoring. Candidates scoring zero are dropped. Ties keep the order
/// the teams were presented in.
#[must_use]
pub fn recommend<'a>(
    teams: &'a [Team],
    profile: &Profile,
    membership: &Membership,
    limit: usize,
) -> Recommendations<'a> {
    if profile.skills.is_empty() {
        return Recommendations::NoSignal;
    }

    let mut ranked: Vec<Recommendation<'a>> = teams
        .iter()
        .filter(|team| !membership.contains(&team.id) && !team.is_full())
        .filter_map(|team| {
            let matched_skills = team.required_skills.matches_in(&profile.skills);
            let matched_interests = team.interests.matches_in(&profile.interests);

            let skill_count = u32::try_from(matched_skills.len()).unwrap_or(u32::MAX);
            let interest_count = u32::try_from(matched_interests.len()).unwrap_or(u32::MAX);
            let score = skill_count * SKILL_WEIGHT + interest_count * INTEREST_WEIGHT;

            (score > 0).then_some(Recommendation {
                team,
                score,
                matched_skills,
                matched_interests,
            })
        })
        .collect();

    // sort_by is stable, so equal scores keep their input order
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit);

    Recommendations::Ranked(ranked)
}
