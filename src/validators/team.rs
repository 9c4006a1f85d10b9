use super::ValidationError;
use crate::types::CreateTeam;

pub fn validate_team_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::NameEmpty);
    }

    if trimmed.len() > 100 {
        return Err(ValidationError::NameTooLong);
    }

    Ok(())
}

pub fn validate_team_kind(kind: &str) -> Result<(), ValidationError> {
    if kind.trim().is_empty() {
        return Err(ValidationError::KindEmpty);
    }

    Ok(())
}

pub fn validate_team_size(size: u32) -> Result<(), ValidationError> {
    if size == 0 {
        return Err(ValidationError::SizeNotPositive);
    }

    Ok(())
}

/// Validates a full listing input before it reaches the entity store.
pub fn validate_create_team(input: &CreateTeam) -> Result<(), ValidationError> {
    validate_team_name(&input.name)?;
    validate_team_kind(&input.kind)?;
    validate_team_size(input.size)?;
    Ok(())
}
