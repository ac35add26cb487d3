use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::ActivityMap;

/// Result of a roster mutation. The repo only reports what happened; turning
/// that into a user-facing error is the service's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterChange {
    Applied,
    Unchanged,
    UnknownActivity,
}

/// Process-lifetime activity directory.
///
/// Every mutation runs its membership check and its write under the same
/// write guard, so two concurrent signups for one email cannot both land.
#[derive(Debug, Clone, Default)]
pub struct ActivitiesRepo {
    inner: Arc<RwLock<ActivityMap>>,
}

impl ActivitiesRepo {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    pub async fn list_activities(&self) -> ActivityMap {
        self.inner.read().await.clone()
    }

    pub async fn count_participants(&self, activity_name: &str) -> Option<usize> {
        self.inner
            .read()
            .await
            .get(activity_name)
            .map(|a| a.participants.len())
    }

    /// Appends `email` to the roster unless it is already on it.
    pub async fn insert_participant(&self, activity_name: &str, email: &str) -> RosterChange {
        let mut activities = self.inner.write().await;
        let Some(activity) = activities.get_mut(activity_name) else {
            return RosterChange::UnknownActivity;
        };
        if activity.has_participant(email) {
            return RosterChange::Unchanged;
        }
        activity.participants.push(email.to_string());
        RosterChange::Applied
    }

    /// Removes `email` from the roster, keeping the order of everyone else.
    pub async fn delete_participant(&self, activity_name: &str, email: &str) -> RosterChange {
        let mut activities = self.inner.write().await;
        let Some(activity) = activities.get_mut(activity_name) else {
            return RosterChange::UnknownActivity;
        };
        let Some(idx) = activity.participants.iter().position(|p| p == email) else {
            return RosterChange::Unchanged;
        };
        activity.participants.remove(idx);
        RosterChange::Applied
    }
}
