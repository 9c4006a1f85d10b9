pub mod team;

pub use team::{validate_create_team, validate_team_kind, validate_team_name, validate_team_size};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    NameEmpty,
    NameTooLong,
    KindEmpty,
    SizeNotPositive,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameEmpty => write!(f, "Team name cannot be empty"),
            Self::NameTooLong => write!(f, "Team name is too long (max 100 characters)"),
            Self::KindEmpty => write!(f, "Team type cannot be empty"),
            Self::SizeNotPositive => write!(f, "Team size must be a positive number"),
        }
    }
}

impl std::error::Error for ValidationError {}
