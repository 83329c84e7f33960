use sqlx::SqlitePool;
use thiserror::Error;

use crate::database::{activities_repo, activity_participants_repo};

#[derive(Debug, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Add `email` to the roster of `activity_name`.
///
/// Capacity (`max_participants`) is intentionally not checked here; the
/// roster may exceed it. See DESIGN.md.
pub async fn signup(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    if !activities_repo::activity_exists(pool, activity_name).await? {
        return Err(SignupError::ActivityNotFound);
    }

    let inserted =
        activity_participants_repo::insert_participant(pool, activity_name, email).await?;
    if inserted == 0 {
        return Err(SignupError::AlreadySignedUp);
    }

    Ok(format!("Signed up {} for {}", email, activity_name))
}

/// Remove `email` from the roster of `activity_name`.
pub async fn unregister(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    if !activities_repo::activity_exists(pool, activity_name).await? {
        return Err(SignupError::ActivityNotFound);
    }

    let removed =
        activity_participants_repo::delete_participant(pool, activity_name, email).await?;
    if removed == 0 {
        return Err(SignupError::NotSignedUp);
    }

    Ok(format!("Removed {} from {}", email, activity_name))
}
