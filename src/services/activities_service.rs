use thiserror::Error;
use tracing::info;

use crate::database::{ActivityMap, ActivityRegistry};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student already signed up for this activity")]
    DuplicateSignup,
    #[error("Student is not signed up for this activity")]
    NotRegistered,
    #[error("Activity is full")]
    ActivityFull,
    #[error("Invalid email address")]
    InvalidEmail,
}

/// Whether signup rejects students once `max_participants` is reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    #[default]
    Unbounded,
    Enforced,
}

impl CapacityPolicy {
    pub fn from_flag(enforce: bool) -> Self {
        if enforce {
            Self::Enforced
        } else {
            Self::Unbounded
        }
    }
}

pub fn list_activities(registry: &ActivityRegistry) -> ActivityMap {
    registry.list_activities()
}

/// Adds `email` to the named activity. Returns the trimmed email that was
/// stored.
pub fn signup_for_activity(
    registry: &ActivityRegistry,
    capacity: CapacityPolicy,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let email = validate_email(email)?;

    let participants = registry.with_activity_mut(activity_name, |activity| {
        let activity = activity.ok_or(SignupError::NotFound)?;
        if activity.has_participant(email) {
            return Err(SignupError::DuplicateSignup);
        }
        if capacity == CapacityPolicy::Enforced && activity.is_full() {
            return Err(SignupError::ActivityFull);
        }
        activity.participants.push(email.to_string());
        Ok(activity.participants.len())
    })?;

    info!(activity = %activity_name, email = %email, participants, "signup_ok");
    Ok(email.to_string())
}

/// Removes `email` from the named activity. Returns the trimmed email that
/// was removed.
pub fn unregister_from_activity(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let email = email.trim();

    let participants = registry.with_activity_mut(activity_name, |activity| {
        let activity = activity.ok_or(SignupError::NotFound)?;
        if !activity.remove_participant(email) {
            return Err(SignupError::NotRegistered);
        }
        Ok(activity.participants.len())
    })?;

    info!(activity = %activity_name, email = %email, participants, "unregister_ok");
    Ok(email.to_string())
}

/// Plausibility check only: one `@` with text on both sides.
pub fn validate_email(email: &str) -> Result<&str, SignupError> {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err(SignupError::InvalidEmail);
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(SignupError::InvalidEmail);
    }
    if email.chars().any(char::is_whitespace) {
        return Err(SignupError::InvalidEmail);
    }
    Ok(email)
}
