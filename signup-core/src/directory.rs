//! In-memory activity directory.
//!
//! Owns the activity catalog for the lifetime of the process. Every
//! operation takes the lock exactly once, so the existence check and the
//! participant list update cannot interleave with another request.

use std::sync::RwLock;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::activity::Activity;
use crate::error::CoreError;
use crate::id::{ActivityName, Email};
use crate::seed::seed_activities;

/// Ordered mapping of activity name to activity record.
pub type Catalog = IndexMap<ActivityName, Activity>;

/// Thread-safe store of activities and their participants.
#[derive(Debug, Default)]
pub struct ActivityDirectory {
    activities: RwLock<Catalog>,
}

impl ActivityDirectory {
    /// Create a directory holding the given catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { activities: RwLock::new(catalog) }
    }

    /// Create a directory holding the seed catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    /// Snapshot of every activity, in catalog order.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn list_activities(&self) -> Catalog {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.activities
            .read()
            .expect("activity directory read lock poisoned")
            .clone()
    }

    /// Snapshot of a single activity, if it exists.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Activity> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.activities
            .read()
            .expect("activity directory read lock poisoned")
            .get(name)
            .cloned()
    }

    /// Number of activities in the catalog.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.activities
            .read()
            .expect("activity directory read lock poisoned")
            .len()
    }

    /// Returns `true` if the catalog holds no activities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `email` to the participants of `activity`.
    ///
    /// Returns a confirmation message naming both the email and the activity.
    ///
    /// # Errors
    /// - [`CoreError::ActivityNotFound`] if no such activity exists.
    /// - [`CoreError::AlreadySignedUp`] if `email` is already a participant.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn signup(&self, activity: &str, email: &str) -> Result<String, CoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut activities = self
            .activities
            .write()
            .expect("activity directory write lock poisoned");

        let record = activities
            .get_mut(activity)
            .ok_or_else(|| CoreError::ActivityNotFound { name: activity.into() })?;

        if record.is_registered(email) {
            debug!(activity, email, "duplicate signup rejected");
            return Err(CoreError::AlreadySignedUp {
                email: email.into(),
                activity: activity.into(),
            });
        }

        record.participants.push(Email::new(email));
        info!(activity, email, participants = record.participants.len(), "participant signed up");
        Ok(format!("Signed up {email} for {activity}"))
    }

    /// Remove `email` from the participants of `activity`.
    ///
    /// Returns a confirmation message naming both the email and the activity.
    ///
    /// # Errors
    /// - [`CoreError::ActivityNotFound`] if no such activity exists.
    /// - [`CoreError::NotRegistered`] if `email` is not a participant.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn unregister(&self, activity: &str, email: &str) -> Result<String, CoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut activities = self
            .activities
            .write()
            .expect("activity directory write lock poisoned");

        let record = activities
            .get_mut(activity)
            .ok_or_else(|| CoreError::ActivityNotFound { name: activity.into() })?;

        let Some(pos) = record.participants.iter().position(|p| p == email) else {
            debug!(activity, email, "unregister of non-participant rejected");
            return Err(CoreError::NotRegistered {
                email: email.into(),
                activity: activity.into(),
            });
        };

        // `remove` rather than `swap_remove`: the list stays in signup order.
        record.participants.remove(pos);
        info!(activity, email, participants = record.participants.len(), "participant unregistered");
        Ok(format!("Unregistered {email} from {activity}"))
    }
}
