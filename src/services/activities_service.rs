use thiserror::Error;
use tracing::{info, warn};

use crate::database::activities_repo::{ActivitiesRepo, RosterChange};
use crate::models::ActivityMap;

/// Why a roster operation was refused. `NotFound` covers unknown activities;
/// the other two variants are conflicts with the current roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

impl ActivityError {
    pub fn is_conflict(&self) -> bool {
        !matches!(self, ActivityError::NotFound)
    }
}

pub async fn list_activities(repo: &ActivitiesRepo) -> ActivityMap {
    repo.list_activities().await
}

pub async fn signup(
    repo: &ActivitiesRepo,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    match repo.insert_participant(activity_name, email).await {
        RosterChange::Applied => {
            info!(activity = %activity_name, email = %email, "participant signed up");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        RosterChange::Unchanged => {
            warn!(activity = %activity_name, email = %email, "duplicate signup rejected");
            Err(ActivityError::AlreadySignedUp)
        }
        RosterChange::UnknownActivity => {
            warn!(activity = %activity_name, "signup for unknown activity");
            Err(ActivityError::NotFound)
        }
    }
}

pub async fn unregister(
    repo: &ActivitiesRepo,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    match repo.delete_participant(activity_name, email).await {
        RosterChange::Applied => {
            info!(activity = %activity_name, email = %email, "participant unregistered");
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
        RosterChange::Unchanged => {
            warn!(activity = %activity_name, email = %email, "unregister of absent participant");
            Err(ActivityError::NotSignedUp)
        }
        RosterChange::UnknownActivity => {
            warn!(activity = %activity_name, "unregister from unknown activity");
            Err(ActivityError::NotFound)
        }
    }
}
